//! Integration tests for the parsing module.
//!
//! Uses snapshot testing on the rendered HTML.
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.


use pretty_assertions::assert_eq;

use crate::parsing::blocks::kinds::Heading;
use crate::parsing::{RenderOptions, render_document};

fn render(md: &str) -> String {
    let html = render_document(md, &RenderOptions::default());
    invariants::check(&html);
    html
}

// Fixture-based snapshot tests

#[test]
fn fixture_document() {
    assert_fixture("document");
}

#[test]
fn fixture_containers() {
    assert_fixture("containers");
}

#[test]
fn fixture_table() {
    assert_fixture("table");
}

#[test]
fn fixture_inline_spans() {
    assert_fixture("inline_spans");
}

#[rstest::rstest]
#[case("document")]
#[case("containers")]
fn fixture_heading_ids_match_source_lines(#[case] name: &str) {
    let md = read_fixture(name);
    let html = render(&md);
    let heading_lines: Vec<usize> = md
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let mut content = line.trim_start();
            while let Some(rest) = content.strip_prefix('>') {
                content = rest.trim_start();
            }
            Heading::atx(content).is_some()
        })
        .map(|(n, _)| n)
        .collect();

    assert!(!heading_lines.is_empty());
    for n in heading_lines {
        assert!(
            html.contains(&format!(r#" id="h{n}">"#)),
            "no id for line {n} in {html}"
        );
    }
}

fn fixtures_dir() -> String {
    format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("{}/{name}.md", fixtures_dir())).unwrap()
}

fn assert_fixture(name: &str) {
    let fixtures_dir = fixtures_dir();
    let md = read_fixture(name);

    let html = render(&md);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, html);
    });
}

// Scenario tests

#[test]
fn heading_has_line_id() {
    assert!(render("# Title\n").contains(r#"<h1 id="h0">Title</h1>"#));
}

#[test]
fn bold_and_em() {
    assert!(render("**bold** and *em*").contains("<strong>bold</strong> and <em>em</em>"));
}

#[test]
fn simple_table() {
    let html = render("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert_eq!(html.matches("<table>").count(), 1);
    assert!(html.contains("<th>a</th>\n<th>b</th>"));
    assert_eq!(html.matches("<tr>").count(), 2);
    assert!(html.contains("<td>1</td>\n<td>2</td>"));
}

#[test]
fn task_items() {
    let html = render("- [ ] todo\n- [x] done\n");
    assert!(html.starts_with("<ul>\n"));
    assert_eq!(html.matches("<li>").count(), 2);
    assert!(html.contains(r#"<li><input type="checkbox" disabled> todo</li>"#));
    assert!(html.contains(r#"<li><input type="checkbox" checked disabled> done</li>"#));
}

#[test]
fn quote_joins_lines() {
    assert_eq!(
        render("> quoted\n> text\n"),
        "<blockquote>\n<p>quoted\ntext</p>\n</blockquote>\n"
    );
}

#[test]
fn fenced_code_language_class() {
    assert_eq!(
        render("```py\ncode\n```\n"),
        "<pre><code class=\"language-py\">code</code></pre>\n"
    );
    assert_eq!(
        render("```py\nif a < b:\n```"),
        "<pre><code class=\"language-py\">if a &lt; b:</code></pre>\n"
    );
}

// Edge cases

#[test]
fn empty_document() {
    assert_eq!(render(""), "");
}

#[test]
fn blank_lines_only() {
    assert_eq!(render("\n\n\n"), "");
}

#[test]
fn crlf_renders_like_lf() {
    assert_eq!(render("# A\r\n\r\ntext\r\n"), render("# A\n\ntext\n"));
}

#[test]
fn unclosed_constructs_become_text() {
    assert_eq!(
        render("[unclosed and `also unclosed **bold"),
        "<p>[unclosed and `also unclosed **bold</p>\n"
    );
}

#[test]
fn heading_ids_are_unique_across_nesting() {
    let html = render("# a\n\n> # b\n\n- item\n  # c\n");
    assert!(html.contains(r#"<h1 id="h0">a</h1>"#));
    assert!(html.contains(r#"<h1 id="h2">b</h1>"#));
    assert!(html.contains(r#"<h1 id="h5">c</h1>"#));
}

#[test]
fn code_block_language_is_escaped() {
    assert_eq!(
        render("```a\"b\nx\n```"),
        "<pre><code class=\"language-a&quot;b\">x</code></pre>\n"
    );
}
