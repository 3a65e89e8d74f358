use crate::parsing::{RenderOptions, inline::render_inline_into, lines::Line, writer::HtmlWriter};

use super::{
    kinds::{
        Alignment, BlockQuote, CodeFence, Heading, IndentedCode, ListMarker, Paragraph, Table,
        TaskState, ThematicBreak,
    },
    open::{BlockOpen, interrupts_paragraph, try_open_block},
};

/// Renders a run of lines as a sequence of blocks.
///
/// Each dispatch step consumes at least one line, so the cursor strictly
/// increases. Blockquote and list item bodies are rendered by recursing on
/// a sub-slice (or, for quotes, on re-sliced copies of the same lines) with
/// `depth + 1`.
pub struct BlockRenderer<'o> {
    opts: &'o RenderOptions,
}

impl<'o> BlockRenderer<'o> {
    pub fn new(opts: &'o RenderOptions) -> Self {
        Self { opts }
    }

    pub fn render(&self, lines: &[Line<'_>]) -> String {
        let mut w = HtmlWriter::new();
        self.render_into(&mut w, lines, 0);
        w.finish()
    }

    pub fn render_into(&self, w: &mut HtmlWriter, lines: &[Line<'_>], depth: usize) {
        if depth >= self.opts.max_nesting {
            log::warn!(
                "block nesting limit {} reached at line {}; rendering {} lines literally",
                self.opts.max_nesting,
                lines.first().map_or(0, |l| l.number),
                lines.len()
            );
            self.render_literal(w, lines);
            return;
        }

        let mut i = 0;
        while i < lines.len() {
            let open = try_open_block(lines, i);
            log::trace!("line {}: {}", lines[i].number, open.name());
            let next = match open {
                BlockOpen::Blank => i + 1,
                BlockOpen::FencedCode(fence) => self.fenced_code(w, lines, i, fence),
                BlockOpen::IndentedCode => self.indented_code(w, lines, i),
                BlockOpen::AtxHeading { level, text } => {
                    self.atx_heading(w, &lines[i], level, text, depth);
                    i + 1
                }
                BlockOpen::SetextHeading { level } => {
                    self.setext_heading(w, &lines[i], level, depth);
                    i + 2
                }
                BlockOpen::ThematicBreak => {
                    w.markup(ThematicBreak::HTML);
                    i + 1
                }
                BlockOpen::BlockQuote => self.block_quote(w, lines, i, depth),
                BlockOpen::Table => self.table(w, lines, i, depth),
                BlockOpen::List(marker) => self.list(w, lines, i, marker, depth),
                BlockOpen::Paragraph => self.paragraph(w, lines, i, depth),
            };
            debug_assert!(next > i, "block cursor must advance");
            i = next;
        }
    }

    fn inline(&self, w: &mut HtmlWriter, text: &str, depth: usize) {
        render_inline_into(w, text, depth, self.opts);
    }

    /// Fallback past the nesting limit: everything as one escaped paragraph.
    fn render_literal(&self, w: &mut HtmlWriter, lines: &[Line<'_>]) {
        let text = lines
            .iter()
            .map(|l| l.text)
            .collect::<Vec<_>>()
            .join("\n");
        if text.trim().is_empty() {
            return;
        }
        w.markup(Paragraph::OPEN);
        w.text(&text);
        w.markup(Paragraph::CLOSE);
    }

    fn fenced_code(
        &self,
        w: &mut HtmlWriter,
        lines: &[Line<'_>],
        start: usize,
        fence: CodeFence<'_>,
    ) -> usize {
        w.markup("<pre><code");
        if let Some(lang) = fence.language {
            w.markup(" class=\"language-");
            w.escaped(lang);
            w.markup("\"");
        }
        w.markup(">");

        let mut i = start + 1;
        let mut first = true;
        while i < lines.len() {
            let line = &lines[i];
            i += 1;
            if fence.closes(line.content()) {
                break;
            }
            if !first {
                w.markup("\n");
            }
            w.escaped(line.text);
            first = false;
        }

        w.markup("</code></pre>\n");
        i
    }

    fn indented_code(&self, w: &mut HtmlWriter, lines: &[Line<'_>], start: usize) -> usize {
        let end = start + IndentedCode::extent(&lines[start..]);
        w.markup("<pre><code>");
        for (n, line) in lines[start..end].iter().enumerate() {
            if n > 0 {
                w.markup("\n");
            }
            if !line.is_blank() {
                w.escaped(IndentedCode::strip(line));
            }
        }
        w.markup("</code></pre>\n");
        end
    }

    fn atx_heading(
        &self,
        w: &mut HtmlWriter,
        line: &Line<'_>,
        level: usize,
        text: &str,
        depth: usize,
    ) {
        w.markup(&format!("<h{level} id=\"h{}\">", line.number));
        self.inline(w, text, depth);
        w.markup(&format!("</h{level}>\n"));
    }

    /// Setext headings carry no id.
    fn setext_heading(&self, w: &mut HtmlWriter, line: &Line<'_>, level: usize, depth: usize) {
        w.markup(&format!("<h{level}>"));
        self.inline(w, line.content().trim_end(), depth);
        w.markup(&format!("</h{level}>\n"));
    }

    fn block_quote(
        &self,
        w: &mut HtmlWriter,
        lines: &[Line<'_>],
        start: usize,
        depth: usize,
    ) -> usize {
        let mut inner = Vec::new();
        let mut i = start;
        while i < lines.len() {
            let line = &lines[i];
            let content = line.content();
            if let Some(rest) = BlockQuote::strip_prefix(content) {
                inner.push(line.with_text(rest));
            } else if line.is_blank() {
                break;
            } else {
                // Lazy continuation.
                inner.push(line.with_text(content));
            }
            i += 1;
        }

        w.markup("<blockquote>\n");
        self.render_into(w, &inner, depth + 1);
        w.markup("</blockquote>\n");
        i
    }

    fn table(&self, w: &mut HtmlWriter, lines: &[Line<'_>], start: usize, depth: usize) -> usize {
        let header = Table::split_row(lines[start].text);
        let aligns = Table::alignments(lines[start + 1].text);
        let align = |c: usize| aligns.get(c).copied().unwrap_or(Alignment::None);

        w.markup("<table>\n<thead>\n<tr>\n");
        for (c, cell) in header.iter().enumerate() {
            w.markup(&format!("<th{}>", align(c).style_attr()));
            self.inline(w, cell, depth);
            w.markup("</th>\n");
        }
        w.markup("</tr>\n</thead>\n<tbody>\n");

        let mut i = start + 2;
        while let Some(line) = lines.get(i) {
            if line.is_blank() || !line.text.contains('|') {
                break;
            }
            let cells = Table::split_row(line.text);
            w.markup("<tr>\n");
            for c in 0..header.len() {
                w.markup(&format!("<td{}>", align(c).style_attr()));
                if let Some(cell) = cells.get(c) {
                    self.inline(w, cell, depth);
                }
                w.markup("</td>\n");
            }
            w.markup("</tr>\n");
            i += 1;
        }

        w.markup("</tbody>\n</table>\n");
        i
    }

    fn list(
        &self,
        w: &mut HtmlWriter,
        lines: &[Line<'_>],
        start: usize,
        first: ListMarker,
        depth: usize,
    ) -> usize {
        let base = lines[start].indent;
        let is_item = |line: &Line<'_>| {
            line.indent <= base + 1 && ListMarker::parse(line.content()).is_some()
        };

        w.markup(&first.open_tag());
        let mut i = start;
        while let Some(line) = lines.get(i) {
            if line.is_blank() {
                // Blank lines between items; the list ends if nothing follows.
                let resume = next_non_blank(lines, i);
                if resume < lines.len() && is_item(&lines[resume]) {
                    i = resume;
                    continue;
                }
                break;
            }
            let Some(marker) =
                ListMarker::parse(line.content()).filter(|_| line.indent <= base + 1)
            else {
                break;
            };

            let (task, text) = TaskState::split(&line.content()[marker.width..]);
            w.markup("<li>");
            w.markup(task.checkbox_html());
            self.inline(w, text, depth);
            i += 1;

            let body_start = i;
            let mut body_end = i;
            while i < lines.len() {
                let resume = if lines[i].is_blank() { next_non_blank(lines, i) } else { i };
                if resume < lines.len() && lines[resume].indent > base + 1 {
                    i = resume + 1;
                    body_end = i;
                } else {
                    break;
                }
            }
            if body_end > body_start {
                w.markup("\n");
                self.render_into(w, &lines[body_start..body_end], depth + 1);
            }
            w.markup("</li>\n");
        }

        w.markup(first.close_tag());
        i
    }

    fn paragraph(
        &self,
        w: &mut HtmlWriter,
        lines: &[Line<'_>],
        start: usize,
        depth: usize,
    ) -> usize {
        let mut text = String::from(lines[start].content());
        let mut i = start + 1;
        while i < lines.len() {
            if Heading::underline_level(lines[i].text).is_some() || interrupts_paragraph(lines, i) {
                break;
            }
            text.push('\n');
            text.push_str(lines[i].content());
            i += 1;
        }

        w.markup(Paragraph::OPEN);
        self.inline(w, &text, depth);
        w.markup(Paragraph::CLOSE);
        i
    }
}

fn next_non_blank(lines: &[Line<'_>], from: usize) -> usize {
    (from..lines.len())
        .find(|&j| !lines[j].is_blank())
        .unwrap_or(lines.len())
}
