use super::kinds::Strength;

/// One inline construct recognised at the cursor.
///
/// Matches are transient: the parser emits each one into the output as
/// soon as it is recognised, nothing is kept after that. Borrowed slices
/// point into the text being parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineMatch<'a> {
    /// A backslash-escaped punctuation character.
    Escaped(&'a str),
    /// Two or more spaces before a line boundary.
    HardBreak,
    /// Interior of a closed code span. Raw zone.
    CodeSpan(&'a str),
    /// A backtick run with no closing run of the same length.
    LiteralTicks(&'a str),
    /// `![alt](url)`; alt is used only as an attribute value.
    Image { alt: &'a str, url: &'a str },
    /// `[label](url)`; label is parsed recursively.
    Link { label: &'a str, url: &'a str },
    /// `~~inner~~`
    Strikethrough(&'a str),
    /// `*inner*`, `**inner**` or `***inner***` (or the `_` forms).
    Emphasis { strength: Strength, inner: &'a str },
    /// A bare `http(s)://` URL.
    Autolink(&'a str),
}
