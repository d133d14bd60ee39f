// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\nA second line.\n\n|a|b|\n|---|---|\n|1|2|\n\n### Detail\n\nMore text.\n";
    base.repeat(size)
}

/// `sections` top-level headings, each with H2 and H3 children holding a
/// paragraph and a table.
#[allow(dead_code)]
pub fn generate_report(sections: usize, rows: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n"));
        content.push_str("Overview paragraph for the section.\n");
        for sub in 0..3 {
            content.push_str(&format!("## Part {sub}\n"));
            content.push_str("Some paragraph content with multiple sentences.\n");
            content.push_str(&format!("### Figures {sub}\n"));
            content.push_str("|name|value|\n|---|---|\n");
            for row in 0..rows {
                content.push_str(&format!("|row {row}|{}|\n", row * sub));
            }
        }
    }

    content
}
