/// A list item marker found at the start of a line's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub kind: ListKind,
    /// Byte length of the marker and the space after it.
    pub width: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Ordered { start: u64 },
}

impl ListMarker {
    pub const BULLETS: &'static [u8] = b"-*+";
    pub const ORDERED_DELIMS: &'static [u8] = b".)";
    pub const MAX_DIGITS: usize = 9;

    /// Recognises `- `, `* `, `+ `, `N. ` or `N) ` at the start of `content`.
    pub fn parse(content: &str) -> Option<Self> {
        let b = content.as_bytes();
        let first = *b.first()?;

        if Self::BULLETS.contains(&first) && b.get(1) == Some(&b' ') {
            return Some(Self {
                kind: ListKind::Bullet,
                width: 2,
            });
        }

        let digits = b.iter().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 || digits > Self::MAX_DIGITS {
            return None;
        }
        let delim = *b.get(digits)?;
        if !Self::ORDERED_DELIMS.contains(&delim) || b.get(digits + 1) != Some(&b' ') {
            return None;
        }
        let start = content[..digits].parse().ok()?;
        Some(Self {
            kind: ListKind::Ordered { start },
            width: digits + 2,
        })
    }

    pub fn open_tag(&self) -> String {
        match self.kind {
            ListKind::Bullet => "<ul>\n".to_string(),
            ListKind::Ordered { start: 1 } => "<ol>\n".to_string(),
            ListKind::Ordered { start } => format!("<ol start=\"{start}\">\n"),
        }
    }

    pub fn close_tag(&self) -> &'static str {
        match self.kind {
            ListKind::Bullet => "</ul>\n",
            ListKind::Ordered { .. } => "</ol>\n",
        }
    }
}

/// Task-list checkbox state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Plain,
    Unchecked,
    Checked,
}

impl TaskState {
    /// Splits a leading `[ ] `, `[x] ` or `[X] ` off item text.
    pub fn split(text: &str) -> (Self, &str) {
        let state = match text.as_bytes() {
            [b'[', b' ', b']', b' ', ..] => TaskState::Unchecked,
            [b'[', b'x' | b'X', b']', b' ', ..] => TaskState::Checked,
            _ => return (TaskState::Plain, text),
        };
        (state, &text[4..])
    }

    pub fn checkbox_html(self) -> &'static str {
        match self {
            TaskState::Plain => "",
            TaskState::Unchecked => r#"<input type="checkbox" disabled> "#,
            TaskState::Checked => r#"<input type="checkbox" checked disabled> "#,
        }
    }
}
