/// A cursor for byte-by-byte inline scanning.
///
/// All delimiters the inline parser looks for are ASCII, so byte indices
/// produced by matching them always fall on `char` boundaries. Plain text is
/// stepped over a whole `char` at a time with [`bump_char`](Self::bump_char).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Peeks `offset` bytes ahead of the current position.
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + offset).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    /// Length of the run of `b` starting at the current position.
    pub fn run_len(&self, b: u8) -> usize {
        run_len(self.s.as_bytes(), self.i, b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances past the current `char`.
    pub fn bump_char(&mut self) {
        if let Some(c) = self.s.get(self.i..).and_then(|rest| rest.chars().next()) {
            self.i += c.len_utf8();
        }
    }

    /// Byte-indexed slice of the underlying string.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}

/// Length of the run of byte `b` in `bytes` starting at `from`.
pub fn run_len(bytes: &[u8], from: usize, b: u8) -> usize {
    bytes
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|&&c| c == b).count())
}
