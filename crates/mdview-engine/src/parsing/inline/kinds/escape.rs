/// Backslash escape of a fixed punctuation set.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Characters a backslash turns into literal text.
    pub const ESCAPABLE: &'static [u8] = b"\\`*_[]()#~!|-";

    pub fn is_escapable(b: u8) -> bool {
        Self::ESCAPABLE.contains(&b)
    }
}
