/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block
/// when no other block opener matches. Their lines are joined with `\n`
/// and rendered as one inline run, so hard breaks can span lines.
pub struct Paragraph;

impl Paragraph {
    pub const OPEN: &'static str = "<p>";
    pub const CLOSE: &'static str = "</p>\n";
}
