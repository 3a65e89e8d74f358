use crate::parsing::lines::Line;

use super::kinds::{BlockQuote, CodeFence, Heading, IndentedCode, ListMarker, Table, ThematicBreak};

/// The block a line opens, decided from the line and the one after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    Blank,
    FencedCode(CodeFence<'a>),
    IndentedCode,
    AtxHeading { level: usize, text: &'a str },
    SetextHeading { level: usize },
    ThematicBreak,
    BlockQuote,
    Table,
    List(ListMarker),
    Paragraph,
}

impl BlockOpen<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            BlockOpen::Blank => "blank",
            BlockOpen::FencedCode(_) => "fenced code",
            BlockOpen::IndentedCode => "indented code",
            BlockOpen::AtxHeading { .. } => "atx heading",
            BlockOpen::SetextHeading { .. } => "setext heading",
            BlockOpen::ThematicBreak => "rule",
            BlockOpen::BlockQuote => "blockquote",
            BlockOpen::Table => "table",
            BlockOpen::List(_) => "list",
            BlockOpen::Paragraph => "paragraph",
        }
    }
}

/// Classifies `lines[i]`. First match in priority order wins; anything
/// else is a paragraph.
pub fn try_open_block<'a>(lines: &[Line<'a>], i: usize) -> BlockOpen<'a> {
    let line = &lines[i];
    let content = line.content();
    let next = lines.get(i + 1);

    if line.is_blank() {
        return BlockOpen::Blank;
    }
    // Precedence: fence beats everything else.
    if let Some(fence) = CodeFence::open(content) {
        return BlockOpen::FencedCode(fence);
    }
    if line.indent >= IndentedCode::MIN_INDENT && ListMarker::parse(content).is_none() {
        return BlockOpen::IndentedCode;
    }
    if let Some((level, text)) = Heading::atx(content) {
        return BlockOpen::AtxHeading { level, text };
    }
    if let Some(level) = next.and_then(|n| Heading::setext_level(n.text)) {
        return BlockOpen::SetextHeading { level };
    }
    if ThematicBreak::matches(line.text) {
        return BlockOpen::ThematicBreak;
    }
    if BlockQuote::is_start(content) {
        return BlockOpen::BlockQuote;
    }
    if next.is_some_and(|n| Table::is_separator(n.text)) {
        return BlockOpen::Table;
    }
    if let Some(marker) = ListMarker::parse(content) {
        return BlockOpen::List(marker);
    }
    BlockOpen::Paragraph
}

/// True when `lines[i]` cannot continue a paragraph because it starts
/// another block.
pub fn interrupts_paragraph(lines: &[Line<'_>], i: usize) -> bool {
    let line = &lines[i];
    let content = line.content();
    line.is_blank()
        || Heading::atx(content).is_some()
        || ThematicBreak::matches(line.text)
        || BlockQuote::is_start(content)
        || CodeFence::open(content).is_some()
        || ListMarker::parse(content).is_some()
        || lines.get(i + 1).is_some_and(|n| Table::is_separator(n.text))
}
