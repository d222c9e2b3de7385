use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::state::{Position, Size};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the playfield in pixels
    pub screen_width: i32,
    /// Height of the playfield in pixels
    pub screen_height: i32,
    /// Size of one snake segment
    pub segment_size: Size,
    /// Size of the food item
    pub food_size: Size,
    /// Pixels the head moves per tick
    pub snake_speed: i32,
    /// Fixed delay between frames
    pub frame_delay_ms: u64,
    /// Font asset, relative to the working directory
    pub font_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            segment_size: Size::new(35, 35),
            food_size: Size::new(35, 35),
            snake_speed: 4,
            frame_delay_ms: 16,
            font_path: PathBuf::from("assets/font.flf"),
        }
    }
}

impl GameConfig {
    pub fn screen_size(&self) -> Size {
        Size::new(self.screen_width, self.screen_height)
    }

    /// Where the snake's head starts each game
    pub fn spawn_point(&self) -> Position {
        Position::new(self.screen_width / 2, self.screen_height / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 800);
        assert_eq!(config.screen_height, 600);
        assert_eq!(config.segment_size, Size::new(35, 35));
        assert_eq!(config.food_size, Size::new(35, 35));
        assert_eq!(config.snake_speed, 4);
        assert_eq!(config.frame_delay_ms, 16);
        assert_eq!(config.font_path, PathBuf::from("assets/font.flf"));
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig {
            screen_width: 400,
            screen_height: 300,
            ..GameConfig::default()
        };
        assert_eq!(config.screen_size(), Size::new(400, 300));
        assert_eq!(config.spawn_point(), Position::new(200, 150));
    }

    #[test]
    fn test_spawn_point_is_screen_center() {
        assert_eq!(GameConfig::default().spawn_point(), Position::new(400, 300));
    }
}
