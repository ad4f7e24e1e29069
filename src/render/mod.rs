//! Terminal rendering.

mod text;

pub use text::TextRenderer;
