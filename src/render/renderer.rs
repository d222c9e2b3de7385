use super::canvas::{Canvas, Color};
use crate::game::{Food, Position, Size, Snake};

const BACKGROUND: Color = Color::BLACK;
const SNAKE_COLOR: Color = Color::WHITE;
const FOOD_COLOR: Color = Color::GREEN;
const TEXT_COLOR: Color = Color::WHITE;

/// Gap between a heading and the hint under it
const HINT_GAP: i32 = 10;

/// Draws each screen of the game onto a [`Canvas`]
pub struct Renderer {
    screen: Size,
}

impl Renderer {
    pub fn new(screen: Size) -> Self {
        Self { screen }
    }

    pub fn clear(&self, canvas: &mut impl Canvas) {
        canvas.clear(BACKGROUND);
    }

    pub fn draw_menu(&self, canvas: &mut impl Canvas) {
        let title = Position::new(self.screen.width / 2 - 50, self.screen.height / 2 - 50);
        let size = canvas.draw_text("SNAKE!!!", title, TEXT_COLOR);
        self.draw_hint(canvas, title, size);
    }

    pub fn draw_snake(&self, canvas: &mut impl Canvas, snake: &Snake) {
        for segment in &snake.segments {
            canvas.fill_rect(segment.position, segment.size, SNAKE_COLOR);
        }
    }

    pub fn draw_food(&self, canvas: &mut impl Canvas, food: &Food) {
        canvas.fill_rect(food.position, food.size, FOOD_COLOR);
    }

    pub fn draw_score(&self, canvas: &mut impl Canvas, score: u32) {
        canvas.draw_text(&format!("Points: {score}"), Position::new(10, 10), TEXT_COLOR);
    }

    pub fn draw_game_over(&self, canvas: &mut impl Canvas, score: u32) {
        let heading = Position::new(self.screen.width / 2 - 100, self.screen.height / 2 - 50);
        let size = canvas.draw_text(&format!("YOU LOST: {score}"), heading, TEXT_COLOR);
        self.draw_hint(canvas, heading, size);
    }

    fn draw_hint(&self, canvas: &mut impl Canvas, above: Position, above_size: Size) {
        let position = Position::new(above.x, above.y + above_size.height + HINT_GAP);
        canvas.draw_text("PRESS SPACE", position, TEXT_COLOR);
    }
}
