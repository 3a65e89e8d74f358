//! Markdown to HTML rendering for mdview.
//!
//! The render path is total: any input text produces an HTML fragment.
//! File loading lives in [`io`] and is the only place errors surface.

pub mod io;
pub mod parsing;

pub use parsing::RenderOptions;
pub use parsing::inline::render_inline;
pub use parsing::lines::{Line, split_lines};

/// Renders a markdown document to an HTML fragment with default options.
pub fn render(markdown: &str) -> String {
    render_with(markdown, &RenderOptions::default())
}

/// Renders a markdown document to an HTML fragment.
pub fn render_with(markdown: &str, opts: &RenderOptions) -> String {
    parsing::render_document(markdown, opts)
}
