pub mod canvas;
pub mod font;
pub mod renderer;
pub mod terminal;

pub use canvas::{Canvas, Color};
pub use font::BitmapFont;
pub use renderer::Renderer;
pub use terminal::TerminalCanvas;
