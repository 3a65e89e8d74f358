use crate::parsing::inline::cursor::run_len;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn marker(self) -> u8 {
        match self {
            FenceKind::Backticks => b'`',
            FenceKind::Tildes => b'~',
        }
    }

    fn from_marker(b: u8) -> Option<Self> {
        match b {
            b'`' => Some(FenceKind::Backticks),
            b'~' => Some(FenceKind::Tildes),
            _ => None,
        }
    }
}

/// An opening code fence: its character, run length and language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeFence<'a> {
    pub kind: FenceKind,
    pub width: usize,
    pub language: Option<&'a str>,
}

impl<'a> CodeFence<'a> {
    pub const MIN_WIDTH: usize = 3;

    /// Recognises an opener in `content` (a line after its indentation).
    ///
    /// A backtick fence whose info text contains a backtick is an inline
    /// code span, not a fence.
    pub fn open(content: &'a str) -> Option<Self> {
        let kind = FenceKind::from_marker(*content.as_bytes().first()?)?;
        let width = run_len(content.as_bytes(), 0, kind.marker());
        if width < Self::MIN_WIDTH {
            return None;
        }

        let info = content[width..].trim();
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        let language = info
            .split(|c: char| c.is_whitespace() || c == '`' || c == '~')
            .next()
            .filter(|lang| !lang.is_empty());

        Some(Self {
            kind,
            width,
            language,
        })
    }

    /// True when `content` closes this fence: a run of the same character
    /// with exactly the opener's length and nothing but whitespace after it.
    pub fn closes(&self, content: &str) -> bool {
        let run = run_len(content.as_bytes(), 0, self.kind.marker());
        run == self.width && content[run..].trim().is_empty()
    }
}
