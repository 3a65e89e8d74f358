/// Links `[text](url)` and images `![alt](url)`.
pub struct Link;

impl Link {
    pub const IMAGE_BANG: u8 = b'!';
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';

    /// Finds the `]` that balances a label opened just before `from`.
    ///
    /// Nested `[`/`]` pairs are counted. Returns the byte index of the
    /// closing bracket.
    pub fn label_end(bytes: &[u8], from: usize) -> Option<usize> {
        let mut depth = 1usize;
        for (j, &b) in bytes.iter().enumerate().skip(from) {
            if b == Self::LABEL_OPEN {
                depth += 1;
            } else if b == Self::LABEL_CLOSE {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
            }
        }
        None
    }

    /// Given the index of a label's `]`, returns `(url_start, url_end)` when a
    /// `(`...`)` destination follows immediately. The url is taken verbatim
    /// up to the first `)`.
    pub fn destination(bytes: &[u8], label_end: usize) -> Option<(usize, usize)> {
        if bytes.get(label_end + 1) != Some(&Self::URL_OPEN) {
            return None;
        }
        let start = label_end + 2;
        let len = bytes.get(start..)?.iter().position(|&b| b == Self::URL_CLOSE)?;
        Some((start, start + len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_end_balances_brackets() {
        assert_eq!(Link::label_end(b"[a [b] c](u)", 1), Some(8));
    }

    #[test]
    fn label_end_unbalanced() {
        assert_eq!(Link::label_end(b"[a [b]", 1), None);
    }

    #[test]
    fn destination_requires_adjacent_paren() {
        assert_eq!(Link::destination(b"[a](u)", 2), Some((4, 5)));
        assert_eq!(Link::destination(b"[a] (u)", 2), None);
        assert_eq!(Link::destination(b"[a](u", 2), None);
    }
}
