/// Column alignment from a table separator cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    /// The `style` attribute for cells in this column, if any.
    ///
    /// Left alignment is the browser default and gets no attribute.
    pub fn style_attr(self) -> &'static str {
        match self {
            Alignment::Center => r#" style="text-align:center""#,
            Alignment::Right => r#" style="text-align:right""#,
            Alignment::None | Alignment::Left => "",
        }
    }

    fn from_cell(cell: &str) -> Self {
        match (cell.starts_with(Table::ALIGN), cell.ends_with(Table::ALIGN)) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            (true, false) => Alignment::Left,
            (false, false) => Alignment::None,
        }
    }
}

/// Pipe tables: a header row, a separator row, then body rows.
pub struct Table;

impl Table {
    pub const PIPE: u8 = b'|';
    pub const ALIGN: char = ':';

    /// True when `line` is a separator row such as `|---|:---:|`.
    ///
    /// Pipes are optional: a bare `---` is a one-column separator. Callers
    /// check rules and setext underlines first.
    pub fn is_separator(line: &str) -> bool {
        let cells = Self::split_row(line);
        !cells.is_empty() && cells.iter().all(|cell| is_separator_cell(cell))
    }

    /// Alignment of each column named by a separator row.
    pub fn alignments(separator: &str) -> Vec<Alignment> {
        Self::split_row(separator)
            .into_iter()
            .map(Alignment::from_cell)
            .collect()
    }

    /// Splits a row into trimmed cells.
    ///
    /// One leading pipe is optional. Pipes inside backtick code or right
    /// after a backslash do not split. A trailing empty cell (from a closing
    /// pipe) is dropped.
    pub fn split_row(line: &str) -> Vec<&str> {
        let bytes = line.as_bytes();
        let mut i = bytes.iter().take_while(|&&b| b == b' ').count();
        if bytes.get(i) == Some(&Self::PIPE) {
            i += 1;
        }

        let mut cells = Vec::new();
        while i < bytes.len() {
            let start = i;
            let mut in_code = false;
            while i < bytes.len() {
                match bytes[i] {
                    b'`' => in_code = !in_code,
                    b'\\' if i + 1 < bytes.len() => i += 1,
                    Self::PIPE if !in_code => break,
                    _ => {}
                }
                i += 1;
            }
            cells.push(line[start..i].trim());
            if i < bytes.len() {
                i += 1;
            }
        }

        if cells.last().is_some_and(|cell| cell.is_empty()) {
            cells.pop();
        }
        cells
    }
}

fn is_separator_cell(cell: &str) -> bool {
    let dashes = cell.strip_prefix(Table::ALIGN).unwrap_or(cell);
    let dashes = dashes.strip_suffix(Table::ALIGN).unwrap_or(dashes);
    !dashes.is_empty() && dashes.bytes().all(|b| b == b'-')
}
