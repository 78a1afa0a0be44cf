//! Rendering for human surfaces (terminal, Markdown).

#![forbid(unsafe_code)]

mod explain;
mod markdown;
mod model;
mod text;

#[cfg(test)]
mod fixtures;

pub use explain::render_explanation;
pub use markdown::render_markdown;
pub use model::{RenderableReceipt, RenderableStatus};
pub use text::render_text;
