use super::ThematicBreak;

/// ATX (`# Title`) and setext (`Title` over `===`) headings.
pub struct Heading;

impl Heading {
    pub const ATX_MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses an ATX heading from `content` (a line after its indentation).
    ///
    /// Returns the level and the heading text with the closing `#` run and
    /// surrounding spaces removed.
    pub fn atx(content: &str) -> Option<(usize, &str)> {
        let level = content.bytes().take_while(|&b| b == Self::ATX_MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL || content.as_bytes().get(level) != Some(&b' ') {
            return None;
        }
        let text = content[level + 1..]
            .trim_end()
            .trim_end_matches(Self::ATX_MARKER as char)
            .trim();
        Some((level, text))
    }

    /// Level of the setext underline `line` would be, `=` giving 1 and `-`
    /// giving 2.
    ///
    /// This only looks at the characters; see [`Heading::setext_level`] for
    /// the rule that decides whether a heading is actually formed.
    pub fn underline_level(line: &str) -> Option<usize> {
        let t = line.trim();
        if !t.is_empty() && t.bytes().all(|b| b == b'=') {
            Some(1)
        } else if !t.is_empty() && t.bytes().all(|b| b == b'-') {
            Some(2)
        } else {
            None
        }
    }

    /// Level of the setext heading `underline` forms under a non-blank line.
    ///
    /// A `-` underline that is also a horizontal rule forms no heading.
    pub fn setext_level(underline: &str) -> Option<usize> {
        match Self::underline_level(underline)? {
            2 if ThematicBreak::matches(underline) => None,
            level => Some(level),
        }
    }
}
