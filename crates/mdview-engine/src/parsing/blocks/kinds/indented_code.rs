use crate::parsing::lines::{Line, TAB_WIDTH};

/// Code block made of lines indented by four or more columns.
pub struct IndentedCode;

impl IndentedCode {
    pub const MIN_INDENT: usize = TAB_WIDTH;

    pub fn is_code_line(line: &Line<'_>) -> bool {
        !line.is_blank() && line.indent >= Self::MIN_INDENT
    }

    /// Number of lines from the start of `lines` that belong to the block.
    ///
    /// Blank lines are kept only when a later line is still indented
    /// enough to continue the block.
    pub fn extent(lines: &[Line<'_>]) -> usize {
        let mut end = 0;
        let mut i = 0;
        while i < lines.len() {
            if Self::is_code_line(&lines[i]) {
                i += 1;
                end = i;
            } else if lines[i].is_blank() {
                i += 1;
            } else {
                break;
            }
        }
        end
    }

    /// The line's code text with one indentation level removed.
    pub fn strip<'a>(line: &Line<'a>) -> &'a str {
        line.strip_columns(Self::MIN_INDENT)
    }
}
