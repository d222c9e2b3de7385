//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A tick can be driven and inspected without a terminal.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo};
pub use food::Food;
pub use snake::{CollisionType, Snake};
pub use state::{GameState, Position, ScreenState, Segment, Size};
