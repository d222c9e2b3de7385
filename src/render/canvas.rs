use anyhow::Result;

use crate::game::{Position, Size};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Immediate-mode drawing surface addressed in playfield pixels.
///
/// Draw calls accumulate into the current frame; nothing is visible until
/// [`Canvas::present`].
pub trait Canvas {
    /// Fill the whole frame with one color
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, position: Position, size: Size, color: Color);

    /// Draw text with its top-left corner at `position` and return the
    /// size it covers
    fn draw_text(&mut self, text: &str, position: Position, color: Color) -> Size;

    /// Show the frame
    fn present(&mut self) -> Result<()>;
}
