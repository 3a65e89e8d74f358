use crate::parsing::{RenderOptions, writer::HtmlWriter};

use super::{
    cursor::Cursor,
    kinds::{Autolink, CodeSpan, Emphasis, Escape, HardBreak, Link, Strength, Strikethrough},
    types::InlineMatch,
};

type Rule = for<'a> fn(&mut Cursor<'a>) -> Option<InlineMatch<'a>>;

/// Inline rules in priority order. At each position the first rule that
/// matches consumes its construct; when none does, one character of plain
/// text is consumed, so every step advances.
const RULES: &[Rule] = &[
    try_parse_escape,
    try_parse_hard_break,
    try_parse_code_span,
    try_parse_image,
    try_parse_link,
    try_parse_strikethrough,
    try_parse_strong_emphasis,
    try_parse_strong,
    try_parse_emphasis,
    try_parse_autolink,
];

/// Renders inline Markdown in `s` to an HTML string.
pub fn render_inline(s: &str) -> String {
    let mut w = HtmlWriter::new();
    render_inline_into(&mut w, s, 0, &RenderOptions::default());
    w.finish()
}

/// Renders inline Markdown in `s` into `w`.
///
/// `depth` counts the enclosing link labels, emphasis and strikethrough
/// spans. Past `opts.max_nesting` the remaining text is escaped literally.
pub(crate) fn render_inline_into(
    w: &mut HtmlWriter,
    s: &str,
    depth: usize,
    opts: &RenderOptions,
) {
    if depth >= opts.max_nesting {
        log::warn!(
            "inline nesting limit {} reached; {} bytes rendered literally",
            opts.max_nesting,
            s.len()
        );
        w.text(s);
        return;
    }

    let mut cur = Cursor::new(s);
    let mut text_start = 0;

    'scan: while !cur.eof() {
        let start = cur.i;
        for rule in RULES {
            if let Some(m) = rule(&mut cur) {
                w.text(cur.slice(text_start, start));
                emit(w, m, depth, opts);
                text_start = cur.i;
                continue 'scan;
            }
        }
        cur.bump_char();
    }

    w.text(cur.slice(text_start, cur.i));
}

fn emit(w: &mut HtmlWriter, m: InlineMatch<'_>, depth: usize, opts: &RenderOptions) {
    match m {
        InlineMatch::Escaped(ch) => w.escaped(ch),
        InlineMatch::HardBreak => w.markup(HardBreak::HTML),
        InlineMatch::CodeSpan(code) => {
            w.markup("<code>");
            w.escaped(code);
            w.markup("</code>");
        }
        InlineMatch::LiteralTicks(ticks) => w.text(ticks),
        InlineMatch::Image { alt, url } => {
            w.markup("<img alt=\"");
            w.text(alt);
            w.markup("\" src=\"");
            w.text(url);
            w.markup("\" style=\"max-width:100%\">");
        }
        InlineMatch::Link { label, url } => {
            w.markup("<a href=\"");
            w.text(url);
            w.markup("\">");
            render_inline_into(w, label, depth + 1, opts);
            w.markup("</a>");
        }
        InlineMatch::Strikethrough(inner) => {
            w.markup("<del>");
            render_inline_into(w, inner, depth + 1, opts);
            w.markup("</del>");
        }
        InlineMatch::Emphasis { strength, inner } => {
            w.markup(strength.open_tag());
            render_inline_into(w, inner, depth + 1, opts);
            w.markup(strength.close_tag());
        }
        InlineMatch::Autolink(url) => {
            w.markup("<a href=\"");
            w.text(url);
            w.markup("\">");
            w.text(url);
            w.markup("</a>");
        }
    }
}

fn try_parse_escape<'a>(cur: &mut Cursor<'a>) -> Option<InlineMatch<'a>> {
    if cur.peek() != Some(Escape::BACKSLASH) || !cur.peek_at(1).is_some_and(Escape::is_escapable) {
        return None;
    }
    let ch = cur.slice(cur.i + 1, cur.i + 2);
    cur.bump_n(2);
    Some(InlineMatch::Escaped(ch))
}

fn try_parse_hard_break<'a>(cur: &mut Cursor<'a>) -> Option<InlineMatch<'a>> {
    let spaces = cur.run_len(b' ');
    if spaces < HardBreak::MIN_SPACES || cur.peek_at(spaces) != Some(b'\n') {
        return None;
    }
    cur.bump_n(spaces + 1);
    Some(InlineMatch::HardBreak)
}

/// Code spans always consume their opening run: either up to the matching
/// close, or just the run itself as literal text.
fn try_parse_code_span<'a>(cur: &mut Cursor<'a>) -> Option<InlineMatch<'a>> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    let start = cur.i;
    let width = cur.run_len(CodeSpan::TICK);
    let open_end = start + width;

    match CodeSpan::find_close(cur.s.as_bytes(), open_end, width) {
        Some((close_start, close_end)) => {
            cur.i = close_end;
            Some(InlineMatch::CodeSpan(cur.slice(open_end, close_start)))
        }
        None => {
            cur.i = open_end;
            Some(InlineMatch::LiteralTicks(cur.slice(start, open_end)))
        }
    }
}

fn try_parse_image<'a>(cur: &mut Cursor<'a>) -> Option<InlineMatch<'a>> {
    if !cur.starts_with(&[Link::IMAGE_BANG, Link::LABEL_OPEN]) {
        return None;
    }
    let bytes = cur.s.as_bytes();
    let alt_start = cur.i + 2;
    let label_end = Link::label_end(bytes, alt_start)?;
    let (url_start, url_end) = Link::destination(bytes, label_end)?;

    let m = InlineMatch::Image {
        alt: cur.slice(alt_start, label_end),
        url: cur.slice(url_start, url_end),
    };
    cur.i = url_end + 1;
    Some(m)
}

fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<InlineMatch<'a>> {
    if cur.peek() != Some(Link::LABEL_OPEN) {
        return None;
    }
    let bytes = cur.s.as_bytes();
    let label_start = cur.i + 1;
    let label_end = Link::label_end(bytes, label_start)?;
    let (url_start, url_end) = Link::destination(bytes, label_end)?;

    let m = InlineMatch::Link {
        label: cur.slice(label_start, label_end),
        url: cur.slice(url_start, url_end),
    };
    cur.i = url_end + 1;
    Some(m)
}

fn try_parse_strikethrough<'a>(cur: &mut Cursor<'a>) -> Option<InlineMatch<'a>> {
    if !cur.starts_with(Strikethrough::DELIM.as_bytes()) {
        return None;
    }
    let inner_start = cur.i + Strikethrough::DELIM.len();
    let close = inner_start + cur.s[inner_start..].find(Strikethrough::DELIM)?;

    let m = InlineMatch::Strikethrough(cur.slice(inner_start, close));
    cur.i = close + Strikethrough::DELIM.len();
    Some(m)
}

fn try_parse_strong_emphasis<'a>(cur: &mut Cursor<'a>) -> Option<InlineMatch<'a>> {
    try_parse_delimited(cur, Strength::StrongEmphasis)
}

fn try_parse_strong<'a>(cur: &mut Cursor<'a>) -> Option<InlineMatch<'a>> {
    try_parse_delimited(cur, Strength::Strong)
}

fn try_parse_emphasis<'a>(cur: &mut Cursor<'a>) -> Option<InlineMatch<'a>> {
    try_parse_delimited(cur, Strength::Emphasis)
}

/// Matches a run of `strength.width()` identical markers and the nearest
/// identical run after it.
///
/// `**` needs a non-empty interior. A single marker may not be followed
/// by a space or a second marker, and the closer may not follow a space.
fn try_parse_delimited<'a>(cur: &mut Cursor<'a>, strength: Strength) -> Option<InlineMatch<'a>> {
    let marker = cur.peek().filter(|&b| Emphasis::is_marker(b))?;
    let width = strength.width();
    if (1..width).any(|k| cur.peek_at(k) != Some(marker)) {
        return None;
    }
    if strength == Strength::Emphasis && matches!(cur.peek_at(1), None | Some(b' ')) {
        return None;
    }
    if strength == Strength::Emphasis && cur.peek_at(1) == Some(marker) {
        return None;
    }

    let inner_start = cur.i + width;
    let delim = cur.slice(cur.i, inner_start);
    let close = inner_start + cur.s[inner_start..].find(delim)?;

    match strength {
        Strength::Strong if close == inner_start => return None,
        Strength::Emphasis if cur.s.as_bytes()[close - 1] == b' ' => return None,
        _ => {}
    }

    let m = InlineMatch::Emphasis {
        strength,
        inner: cur.slice(inner_start, close),
    };
    cur.i = close + width;
    Some(m)
}

fn try_parse_autolink<'a>(cur: &mut Cursor<'a>) -> Option<InlineMatch<'a>> {
    let len = Autolink::url_len(&cur.s[cur.i..])?;
    let url = cur.slice(cur.i, cur.i + len);
    cur.bump_n(len);
    Some(InlineMatch::Autolink(url))
}
