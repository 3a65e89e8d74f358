/// Bare `http://` / `https://` URLs turned into links.
pub struct Autolink;

impl Autolink {
    pub const SCHEMES: [&'static str; 2] = ["https://", "http://"];

    /// Punctuation dropped from the end of a captured URL.
    pub const TRAILING_TRIM: &'static [u8] = b".,;";

    /// Bytes that end the URL run.
    pub fn is_stop(b: u8) -> bool {
        b.is_ascii_whitespace() || matches!(b, b')' | b'>' | b'"')
    }

    /// Length of the scheme prefix at the start of `rest`, if any.
    pub fn scheme_len(rest: &str) -> Option<usize> {
        Self::SCHEMES
            .iter()
            .find(|scheme| rest.starts_with(*scheme))
            .map(|scheme| scheme.len())
    }

    /// Byte length of the URL at the start of `rest`, trailing punctuation
    /// trimmed. `None` unless something follows the scheme.
    pub fn url_len(rest: &str) -> Option<usize> {
        let scheme = Self::scheme_len(rest)?;
        let bytes = rest.as_bytes();
        let mut end = bytes.iter().position(|&b| Self::is_stop(b)).unwrap_or(bytes.len());
        while end > scheme && Self::TRAILING_TRIM.contains(&bytes[end - 1]) {
            end -= 1;
        }
        (end > scheme).then_some(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://example.com rest", Some(19))]
    #[case("http://a.b/c.", Some(12))]
    #[case("https://x.org/p,;", Some(15))]
    #[case("https://x.org)", Some(13))]
    #[case("http://", None)]
    #[case("http://...", None)]
    #[case("ftp://x", None)]
    fn url_len_cases(#[case] input: &str, #[case] expected: Option<usize>) {
        assert_eq!(Autolink::url_len(input), expected);
    }
}
