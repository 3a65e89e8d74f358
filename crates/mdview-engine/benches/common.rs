// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use std::fmt::Write;

/// `sections` sections, each cycling through every block kind the
/// renderer knows so no single path dominates.
#[allow(dead_code)]
pub fn generate_markdown_content(sections: usize) -> String {
    let mut doc = String::new();
    for n in 0..sections {
        let _ = writeln!(doc, "## Section {n}\n");
        let _ = writeln!(
            doc,
            "Paragraph {n} with *some* **content**, `code` and https://example.com/{n}.\n"
        );
        push_table(&mut doc, 2 + n % 4, 3);
        push_task_list(&mut doc, n);
        push_quote(&mut doc, 1 + n % 3);
        if n % 2 == 0 {
            doc.push_str("```rust\nfn example() {\n    println!(\"<{}>\", 1 & 2);\n}\n```\n\n");
        } else {
            doc.push_str("    indented <code>\n    more\n\n");
        }
        doc.push_str("Setext\n======\n\n* * *\n\n");
    }
    doc
}

/// Headed sections whose lists nest `depth` levels deep.
#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize, depth: usize) -> String {
    let mut doc = String::new();
    for section in 0..sections {
        let _ = writeln!(doc, "# Section {section}\n");
        for level in 0..depth {
            let indent = "  ".repeat(level);
            let marker = if level % 2 == 0 { "-" } else { "1." };
            let _ = writeln!(doc, "{indent}{marker} Item at level {level} with ~~old~~ text");
        }
        doc.push('\n');
    }
    doc
}

/// Pathological nesting: `depth` levels of blockquote wrapping emphasis.
#[allow(dead_code)]
pub fn generate_deep_nesting(depth: usize) -> String {
    format!("{}{}x{}", "> ".repeat(depth), "*a ".repeat(depth), " b*".repeat(depth))
}

fn push_table(doc: &mut String, columns: usize, rows: usize) {
    let header: Vec<String> = (0..columns).map(|c| format!("col {c}")).collect();
    let _ = writeln!(doc, "| {} |", header.join(" | "));
    let separator: Vec<&str> = (0..columns)
        .map(|c| [":--", ":-:", "--:"][c % 3])
        .collect();
    let _ = writeln!(doc, "|{}|", separator.join("|"));
    for r in 0..rows {
        let cells: Vec<String> = (0..columns).map(|c| format!("`{r}|{c}`")).collect();
        let _ = writeln!(doc, "| {} |", cells.join(" | "));
    }
    doc.push('\n');
}

fn push_task_list(doc: &mut String, seed: usize) {
    for i in 0..3 {
        let mark = if (seed + i) % 2 == 0 { "x" } else { " " };
        let _ = writeln!(doc, "- [{mark}] task {i}");
    }
    doc.push('\n');
}

fn push_quote(doc: &mut String, depth: usize) {
    let prefix = "> ".repeat(depth);
    let _ = writeln!(doc, "{prefix}Quoted [link](https://example.com) text");
    doc.push_str("lazy continuation\n\n");
}
