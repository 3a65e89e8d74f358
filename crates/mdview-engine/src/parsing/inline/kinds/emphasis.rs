/// Emphasis delimiters `*` and `_` in runs of one, two or three.
pub struct Emphasis;

impl Emphasis {
    pub const MARKERS: &'static [u8] = b"*_";

    pub fn is_marker(b: u8) -> bool {
        Self::MARKERS.contains(&b)
    }
}

/// How strongly a span is emphasised; the delimiter width is the variant's weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    /// `*text*` / `_text_`
    Emphasis,
    /// `**text**` / `__text__`
    Strong,
    /// `***text***` / `___text___`
    StrongEmphasis,
}

impl Strength {
    pub fn width(self) -> usize {
        match self {
            Strength::Emphasis => 1,
            Strength::Strong => 2,
            Strength::StrongEmphasis => 3,
        }
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            Strength::Emphasis => "<em>",
            Strength::Strong => "<strong>",
            Strength::StrongEmphasis => "<strong><em>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            Strength::Emphasis => "</em>",
            Strength::Strong => "</strong>",
            Strength::StrongEmphasis => "</em></strong>",
        }
    }
}
