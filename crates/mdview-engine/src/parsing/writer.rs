/// Growable HTML output buffer.
///
/// Every byte that reaches the output goes through one of three doors:
/// [`markup`](Self::markup) for tags the renderer means to emit,
/// [`text`](Self::text) for caller text outside code, and
/// [`escaped`](Self::escaped) for code and other verbatim content.
/// Keeping the doors separate is what guarantees caller text is escaped
/// exactly once.
#[derive(Debug)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Starting capacity; growth after that is `String`'s amortized doubling.
    pub const INITIAL_CAPACITY: usize = 4096;

    pub fn new() -> Self {
        Self {
            out: String::with_capacity(Self::INITIAL_CAPACITY),
        }
    }

    /// Appends intentional markup verbatim.
    pub fn markup(&mut self, html: &str) {
        self.out.push_str(html);
    }

    /// Appends caller text with the 4-entity escape (`&`, `<`, `>`, `"`).
    ///
    /// Well-formed character references (`&amp;`, `&#169;`, `&#x1F600;`) are
    /// passed through untouched so rendering already-escaped text is a no-op
    /// on its entities.
    pub fn text(&mut self, s: &str) {
        let mut rest = s;
        while let Some(amp) = rest.find('&') {
            match entity_len(&rest[amp..]) {
                Some(len) => {
                    self.escaped(&rest[..amp]);
                    self.out.push_str(&rest[amp..amp + len]);
                    rest = &rest[amp + len..];
                }
                None => {
                    self.escaped(&rest[..=amp]);
                    rest = &rest[amp + 1..];
                }
            }
        }
        self.escaped(rest);
    }

    /// Appends text with the strict 4-entity escape, entities included.
    pub fn escaped(&mut self, s: &str) {
        html_escape::encode_double_quoted_attribute_to_string(s, &mut self.out);
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes `s` with the entity-aware text escape.
pub fn escape_text(s: &str) -> String {
    let mut w = HtmlWriter::new();
    w.text(s);
    w.finish()
}

/// Length of the character reference at the start of `s`, if it is one.
///
/// Accepts `&name;` (ASCII letter then alphanumerics, up to 32), `&#digits;`
/// (up to 7) and `&#xhex;` (up to 6).
fn entity_len(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    if b.first() != Some(&b'&') {
        return None;
    }

    let (start, max, numeric, hex) = match (b.get(1), b.get(2)) {
        (Some(b'#'), Some(b'x' | b'X')) => (3, 6, true, true),
        (Some(b'#'), _) => (2, 7, true, false),
        (Some(c), _) if c.is_ascii_alphabetic() => (1, 32, false, false),
        _ => return None,
    };

    let run = b[start..]
        .iter()
        .take(max + 1)
        .take_while(|c| match (numeric, hex) {
            (true, true) => c.is_ascii_hexdigit(),
            (true, false) => c.is_ascii_digit(),
            _ => c.is_ascii_alphanumeric(),
        })
        .count();

    if run == 0 || run > max || b.get(start + run) != Some(&b';') {
        return None;
    }
    Some(start + run + 1)
}
