use anyhow::{Context, Result};
use ratatui::{Terminal, backend::Backend, buffer::Buffer, layout::Rect, style::Style};

use super::canvas::{Canvas, Color};
use super::font::BitmapFont;
use crate::game::{Position, Size};

impl From<Color> for ratatui::style::Color {
    fn from(color: Color) -> Self {
        ratatui::style::Color::Rgb(color.r, color.g, color.b)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum DrawCommand {
    Clear(Color),
    Rect(Position, Size, Color),
    Text(String, Position, Color),
}

/// Maps playfield pixels onto the terminal's cell grid
#[derive(Debug, Clone, Copy)]
struct Viewport {
    area: Rect,
    screen: Size,
}

impl Viewport {
    fn column(&self, x: i32) -> i64 {
        scale_floor(x.into(), self.area.width.into(), self.screen.width.into())
    }

    fn row(&self, y: i32) -> i64 {
        scale_floor(y.into(), self.area.height.into(), self.screen.height.into())
    }

    /// Cells touched by a pixel rectangle, clipped to the area
    fn cells(&self, position: Position, size: Size) -> Rect {
        let width = i64::from(self.area.width);
        let height = i64::from(self.area.height);

        let left = self.column(position.x).clamp(0, width);
        let right = scale_ceil(
            (position.x + size.width).into(),
            width,
            self.screen.width.into(),
        )
        .clamp(0, width);
        let top = self.row(position.y).clamp(0, height);
        let bottom = scale_ceil(
            (position.y + size.height).into(),
            height,
            self.screen.height.into(),
        )
        .clamp(0, height);

        Rect::new(
            self.area.x + left as u16,
            self.area.y + top as u16,
            (right - left).max(0) as u16,
            (bottom - top).max(0) as u16,
        )
    }

    /// Pixel size of a block of cells
    fn pixels(&self, columns: usize, rows: usize) -> Size {
        let width = scale_ceil(
            columns as i64,
            self.screen.width.into(),
            self.area.width.into(),
        );
        let height = scale_ceil(
            rows as i64,
            self.screen.height.into(),
            self.area.height.into(),
        );
        Size::new(width as i32, height as i32)
    }
}

/// `value * numerator / denominator`, rounded down
fn scale_floor(value: i64, numerator: i64, denominator: i64) -> i64 {
    if denominator <= 0 {
        return 0;
    }
    (value * numerator).div_euclid(denominator)
}

/// `value * numerator / denominator`, rounded up
fn scale_ceil(value: i64, numerator: i64, denominator: i64) -> i64 {
    if denominator <= 0 {
        return 0;
    }
    -(-(value * numerator)).div_euclid(denominator)
}

/// [`Canvas`] that draws onto a ratatui terminal.
///
/// The logical `screen` is stretched over the whole terminal, so one cell
/// covers `screen / terminal size` pixels. Text uses a [`BitmapFont`] with
/// one font row per terminal row.
pub struct TerminalCanvas<B: Backend> {
    terminal: Terminal<B>,
    font: BitmapFont,
    screen: Size,
    area: Rect,
    commands: Vec<DrawCommand>,
}

impl<B: Backend> TerminalCanvas<B> {
    pub fn new(mut terminal: Terminal<B>, font: BitmapFont, screen: Size) -> Self {
        let area = terminal.get_frame().area();
        Self {
            terminal,
            font,
            screen,
            area,
            commands: Vec::new(),
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            area: self.area,
            screen: self.screen,
        }
    }
}

impl<B: Backend> Canvas for TerminalCanvas<B> {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, position: Position, size: Size, color: Color) {
        self.commands.push(DrawCommand::Rect(position, size, color));
    }

    fn draw_text(&mut self, text: &str, position: Position, color: Color) -> Size {
        let (columns, rows) = self.font.measure(text);
        self.commands
            .push(DrawCommand::Text(text.to_string(), position, color));
        self.viewport().pixels(columns, rows)
    }

    fn present(&mut self) -> Result<()> {
        let commands = std::mem::take(&mut self.commands);
        let font = &self.font;
        let screen = self.screen;

        let completed = self
            .terminal
            .draw(|frame| {
                let viewport = Viewport {
                    area: frame.area(),
                    screen,
                };
                let buffer = frame.buffer_mut();
                for command in &commands {
                    paint(buffer, viewport, font, command);
                }
            })
            .context("Failed to draw frame")?;

        self.area = completed.area;
        Ok(())
    }
}

fn paint(buffer: &mut Buffer, viewport: Viewport, font: &BitmapFont, command: &DrawCommand) {
    let area = viewport.area;
    match command {
        DrawCommand::Clear(color) => {
            buffer.set_style(area, Style::default().bg((*color).into()));
        }
        DrawCommand::Rect(position, size, color) => {
            let cells = viewport.cells(*position, *size).intersection(area);
            buffer.set_style(cells, Style::default().bg((*color).into()));
        }
        DrawCommand::Text(text, position, color) => {
            let left = viewport.column(position.x);
            let top = viewport.row(position.y);
            if left < 0 || left >= area.width as i64 {
                return;
            }

            let style = Style::default().fg((*color).into());
            for (offset, line) in font.render(text).iter().enumerate() {
                let row = top + offset as i64;
                if row < 0 {
                    continue;
                }
                if row >= area.height as i64 {
                    break;
                }
                buffer.set_string(area.x + left as u16, area.y + row as u16, line, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    const SCREEN: Size = Size {
        width: 800,
        height: 600,
    };

    fn font() -> BitmapFont {
        let mut source = String::from("flf2a$ 2 1 4 -1 0\n");
        for code in b' '..=b'~' {
            if code == b'X' {
                source.push_str("XX@\nXX@@\n");
            } else {
                source.push_str("$@\n$@@\n");
            }
        }
        BitmapFont::parse(&source).unwrap()
    }

    /// 100x30 cells: each cell is 8x20 pixels
    fn canvas() -> TerminalCanvas<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        TerminalCanvas::new(terminal, font(), SCREEN)
    }

    fn bg(canvas: &mut TerminalCanvas<TestBackend>, x: u16, y: u16) -> ratatui::style::Color {
        canvas.terminal_mut().backend().buffer()[(x, y)].bg
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(
            ratatui::style::Color::from(Color::GREEN),
            ratatui::style::Color::Rgb(0, 255, 0)
        );
    }

    #[test]
    fn test_viewport_cells() {
        let viewport = Viewport {
            area: Rect::new(0, 0, 100, 30),
            screen: SCREEN,
        };

        assert_eq!(
            viewport.cells(Position::new(400, 300), Size::new(35, 35)),
            Rect::new(50, 15, 5, 2)
        );
        assert_eq!(
            viewport.cells(Position::new(0, 0), Size::new(800, 600)),
            Rect::new(0, 0, 100, 30)
        );
        // Clipped at the edges
        assert_eq!(
            viewport.cells(Position::new(-16, 590), Size::new(35, 35)),
            Rect::new(0, 29, 3, 1)
        );
    }

    #[test]
    fn test_viewport_pixels() {
        let viewport = Viewport {
            area: Rect::new(0, 0, 100, 30),
            screen: SCREEN,
        };
        assert_eq!(viewport.pixels(4, 2), Size::new(32, 40));
        assert_eq!(viewport.pixels(0, 0), Size::new(0, 0));
    }

    #[test]
    fn test_fill_rect_paints_cells() {
        let mut canvas = canvas();
        canvas.clear(Color::BLACK);
        canvas.fill_rect(Position::new(400, 300), Size::new(35, 35), Color::WHITE);
        canvas.present().unwrap();

        let white = ratatui::style::Color::Rgb(255, 255, 255);
        let black = ratatui::style::Color::Rgb(0, 0, 0);
        assert_eq!(bg(&mut canvas, 50, 15), white);
        assert_eq!(bg(&mut canvas, 54, 16), white);
        assert_eq!(bg(&mut canvas, 49, 15), black);
        assert_eq!(bg(&mut canvas, 55, 15), black);
        assert_eq!(bg(&mut canvas, 50, 17), black);
    }

    #[test]
    fn test_draw_text_measures_and_renders() {
        let mut canvas = canvas();
        canvas.clear(Color::BLACK);
        let size = canvas.draw_text("XX", Position::new(80, 40), Color::WHITE);
        assert_eq!(size, Size::new(32, 40));
        canvas.present().unwrap();

        let buffer = canvas.terminal_mut().backend().buffer().clone();
        assert_eq!(buffer[(10, 2)].symbol(), "X");
        assert_eq!(buffer[(13, 3)].symbol(), "X");
        assert_eq!(buffer[(14, 2)].symbol(), " ");
        assert_eq!(buffer[(10, 2)].fg, ratatui::style::Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_offscreen_text_is_skipped() {
        let mut canvas = canvas();
        canvas.clear(Color::BLACK);
        canvas.draw_text("XX", Position::new(-80, 0), Color::WHITE);
        canvas.draw_text("XX", Position::new(0, 590), Color::WHITE);
        canvas.present().unwrap();

        let buffer = canvas.terminal_mut().backend().buffer().clone();
        assert_eq!(buffer[(0, 29)].symbol(), "X");
        assert_eq!(buffer[(0, 0)].symbol(), " ");
    }

    #[test]
    fn test_present_starts_a_new_frame() {
        let mut canvas = canvas();
        canvas.clear(Color::BLACK);
        canvas.fill_rect(Position::new(0, 0), Size::new(35, 35), Color::GREEN);
        canvas.present().unwrap();

        canvas.clear(Color::BLACK);
        canvas.present().unwrap();

        assert_eq!(bg(&mut canvas, 0, 0), ratatui::style::Color::Rgb(0, 0, 0));
    }
}
