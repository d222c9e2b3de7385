//! Snake Arcade - a real-time snake game for the terminal
//!
//! This library provides:
//! - Core game logic (game module), usable without a terminal
//! - Keyboard input mapping (input module)
//! - Immediate-mode drawing onto the terminal (render module)
//! - The interactive frame loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
