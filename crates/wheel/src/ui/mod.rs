use crate::selection::RenderInstruction;
use plutchik::{Color, EmotionId};

pub mod terminal;

pub use terminal::TerminalRenderer;

/// Presentation layer driven by the session.
pub trait Renderer {
    /// Shown while the catalog loads and until the first selection.
    fn show_placeholder(&mut self);

    fn hide_placeholder(&mut self);

    fn render(&mut self, instruction: &RenderInstruction);

    /// Falls back to a static, non-interactive wheel. Must tolerate being
    /// called more than once.
    fn escape_to_static_mode(&mut self, message: &str);

    /// `None` clears the highlight.
    fn highlight_region(&mut self, _id: &EmotionId, _color: Option<Color>) {}
}
