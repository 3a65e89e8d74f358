use crate::parsing::inline::cursor::run_len;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: their interior is escaped but never parsed
/// for other inline constructs. An opening run of N backticks is closed only
/// by a run of exactly N.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Finds the closing run for an opener of `width` backticks.
    ///
    /// Scans `bytes` from `from`; returns `(close_start, close_end)` of the
    /// first run whose length is exactly `width`.
    pub fn find_close(bytes: &[u8], from: usize, width: usize) -> Option<(usize, usize)> {
        let mut e = from;
        while e < bytes.len() {
            if bytes[e] == Self::TICK {
                let run = run_len(bytes, e, Self::TICK);
                if run == width {
                    return Some((e, e + run));
                }
                e += run;
            } else {
                e += 1;
            }
        }
        None
    }
}
