use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::food::Food;
use super::snake::Snake;

/// A position on the playfield, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position `distance` pixels in a direction
    pub fn moved_in_direction(&self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * distance, dy * distance)
    }
}

/// Width and height, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// One fixed-size square of the snake's body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub position: Position,
    pub size: Size,
}

impl Segment {
    pub fn new(position: Position, size: Size) -> Self {
        Self { position, size }
    }

    /// Axis-aligned box overlap. Edges are inclusive, so boxes that only
    /// touch still count.
    pub fn intersects(&self, position: Position, size: Size) -> bool {
        self.position.x + self.size.width >= position.x
            && self.position.x <= position.x + size.width
            && self.position.y + self.size.height >= position.y
            && self.position.y <= position.y + size.height
    }
}

/// Which screen the game is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenState {
    #[default]
    Menu,
    Play,
    GameOver,
}

/// Complete game state, owned by the driver and threaded through each frame
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub screen: ScreenState,
    pub running: bool,
    pub snake: Snake,
    pub food: Food,
}

impl GameState {
    /// Create a new game state sitting on the menu
    pub fn new(snake: Snake, food: Food) -> Self {
        Self {
            screen: ScreenState::Menu,
            running: true,
            snake,
            food,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.screen == ScreenState::Play
    }
}
