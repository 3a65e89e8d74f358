pub mod blocks;
pub mod inline;
pub mod lines;
pub mod writer;

#[cfg(test)]
mod tests;

use blocks::BlockRenderer;
use lines::split_lines;

/// Knobs threaded through a single render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum structural nesting (blockquotes, list items, inline spans)
    /// before content is rendered as escaped literal text.
    pub max_nesting: usize,
}

impl RenderOptions {
    pub const DEFAULT_MAX_NESTING: usize = 100;
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_nesting: Self::DEFAULT_MAX_NESTING,
        }
    }
}

/// Renders a whole document to an HTML fragment.
pub fn render_document(markdown: &str, opts: &RenderOptions) -> String {
    let lines = split_lines(markdown);
    let html = BlockRenderer::new(opts).render(&lines);
    log::debug!(
        "rendered {} lines ({} bytes) into {} bytes of html",
        lines.len(),
        markdown.len(),
        html.len()
    );
    html
}
