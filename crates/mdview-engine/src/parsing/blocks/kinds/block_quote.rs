/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// renderer code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// True when `content` (a line after its indentation) opens a quote:
    /// `>` followed by a space or the end of the line.
    pub fn is_start(content: &str) -> bool {
        Self::strip_prefix(content).is_some()
    }

    /// Strips one `>` and at most one following space.
    ///
    /// `>text` without the space is not a quote line and yields `None`.
    pub fn strip_prefix(content: &str) -> Option<&str> {
        let rest = content.strip_prefix(Self::PREFIX)?;
        if rest.is_empty() {
            Some(rest)
        } else {
            rest.strip_prefix(' ')
        }
    }
}
