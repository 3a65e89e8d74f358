/// Width of a tab stop when measuring indentation.
pub const TAB_WIDTH: usize = 4;

/// A single logical line of the document.
///
/// Text is borrowed from the input; the trailing `\r` of a CRLF pair is
/// already gone. `number` is the 0-based index of the line in the source
/// document and survives into nested sub-documents, so heading ids stay
/// unique however deep a heading is nested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 0-based index in the source document.
    pub number: usize,
    /// Line text without the line terminator.
    pub text: &'a str,
    /// Leading whitespace measured in columns, tabs expanded to the next multiple of 4.
    pub indent: usize,
    /// Byte offset into `text` where the first non-whitespace character starts.
    content_start: usize,
}

impl<'a> Line<'a> {
    pub fn new(number: usize, text: &'a str) -> Self {
        let (indent, content_start) = measure_indent(text);
        Self {
            number,
            text,
            indent,
            content_start,
        }
    }

    /// The same originating line with different text (e.g. after stripping a quote prefix).
    pub fn with_text(&self, text: &'a str) -> Self {
        Self::new(self.number, text)
    }

    /// Text after the leading indentation.
    pub fn content(&self) -> &'a str {
        &self.text[self.content_start..]
    }

    /// True for empty and whitespace-only lines.
    pub fn is_blank(&self) -> bool {
        self.content().trim_end().is_empty()
    }

    /// Removes up to `columns` columns of leading whitespace.
    ///
    /// Tabs always end on a tab stop, so asking for a multiple of
    /// [`TAB_WIDTH`] strips exactly that many columns from an indented line.
    pub fn strip_columns(&self, columns: usize) -> &'a str {
        let mut col = 0usize;
        for (i, b) in self.text.bytes().enumerate() {
            if col >= columns {
                return &self.text[i..];
            }
            match b {
                b' ' => col += 1,
                b'\t' => col += TAB_WIDTH - col % TAB_WIDTH,
                _ => return &self.text[i..],
            }
        }
        ""
    }
}

/// Splits raw text into logical lines.
///
/// One line per `\n` plus one, blank lines preserved, a `\r` right before
/// each split point removed. Never fails.
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(number, raw)| Line::new(number, raw.strip_suffix('\r').unwrap_or(raw)))
        .collect()
}

/// Returns `(columns, byte_offset)` of the leading spaces and tabs.
fn measure_indent(text: &str) -> (usize, usize) {
    let mut col = 0usize;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b' ' => col += 1,
            b'\t' => col += TAB_WIDTH - col % TAB_WIDTH,
            _ => return (col, i),
        }
    }
    (col, text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn split_keeps_blank_lines() {
        let lines = split_lines("a\n\nb");
        let texts: Vec<_> = lines.iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["a", "", "b"]);
    }

    #[test]
    fn split_strips_carriage_returns() {
        let lines = split_lines("one\r\ntwo\r\n");
        let texts: Vec<_> = lines.iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["one", "two", ""]);
    }

    #[test]
    fn line_count_is_boundaries_plus_one() {
        assert_eq!(split_lines("").len(), 1);
        assert_eq!(split_lines("x").len(), 1);
        assert_eq!(split_lines("x\n").len(), 2);
        assert_eq!(split_lines("\n\n\n").len(), 4);
    }

    #[test]
    fn lone_carriage_return_inside_line_is_kept() {
        let lines = split_lines("a\rb\n");
        assert_eq!(lines[0].text, "a\rb");
    }

    #[test]
    fn numbers_are_zero_based() {
        let lines = split_lines("a\nb\nc");
        assert_eq!(lines[2].number, 2);
    }

    #[rstest]
    #[case("text", 0, "text")]
    #[case("  text", 2, "text")]
    #[case("\ttext", 4, "text")]
    #[case("  \ttext", 4, "text")]
    #[case(" \t \ttext", 8, "text")]
    #[case("    ", 4, "")]
    fn indentation_expands_tabs(
        #[case] text: &str,
        #[case] indent: usize,
        #[case] content: &str,
    ) {
        let line = Line::new(0, text);
        assert_eq!(line.indent, indent);
        assert_eq!(line.content(), content);
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        assert!(Line::new(0, "   \t ").is_blank());
        assert!(!Line::new(0, "  x").is_blank());
    }

    #[rstest]
    #[case("    code", "code")]
    #[case("\tcode", "code")]
    #[case("      code", "  code")]
    #[case("  \tcode", "code")]
    #[case("\t\tcode", "\tcode")]
    fn strip_four_columns(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(Line::new(0, text).strip_columns(4), expected);
    }

    #[test]
    fn with_text_keeps_number_and_remeasures() {
        let line = Line::new(7, "> quoted");
        let inner = line.with_text("  quoted");
        assert_eq!(inner.number, 7);
        assert_eq!(inner.indent, 2);
    }
}
