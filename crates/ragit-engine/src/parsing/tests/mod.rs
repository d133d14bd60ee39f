//! Scenario tests for tree construction.
//!
//! Expected trees are written as nested `SnapNode`s so failures diff cleanly.

use pretty_assertions::assert_eq;

use crate::parsing::{
    BlankLines, ParseError, ParseOptions, parse_lines, parse_str,
    render::{DEFAULT_INDENT, dump},
    snapshot::{self, SnapNode},
};

fn heading(level: u8, caption: &str, children: Vec<SnapNode>) -> SnapNode {
    SnapNode::Heading {
        level,
        caption: caption.to_string(),
        children,
    }
}

fn para(lines: &[&str]) -> SnapNode {
    SnapNode::Paragraph {
        lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}

fn table(rows: &[&str]) -> SnapNode {
    SnapNode::Table {
        rows: rows.iter().map(|r| r.to_string()).collect(),
    }
}

fn parse(lines: &[&str]) -> Vec<SnapNode> {
    let tree = parse_lines(lines, &ParseOptions::default()).unwrap();
    snapshot::invariants(&tree);
    snapshot::normalize(&tree).children
}

#[test]
fn empty_input_is_bare_root() {
    assert_eq!(parse(&[]), vec![]);
}

#[test]
fn sibling_top_level_headings() {
    assert_eq!(
        parse(&["# Header 1", "# Header 2"]),
        vec![heading(1, "Header 1", vec![]), heading(1, "Header 2", vec![])]
    );
}

#[test]
fn mixed_tables_headings_and_text() {
    assert_eq!(
        parse(&[
            "# Header 1",
            "|name|age|",
            "|x|1|",
            "## Header 1.1",
            "this is text",
            "|a|1|",
        ]),
        vec![heading(
            1,
            "Header 1",
            vec![
                table(&["|name|age|", "|x|1|"]),
                heading(
                    2,
                    "Header 1.1",
                    vec![para(&["this is text"]), table(&["|a|1|"])]
                ),
            ]
        )]
    );
}

#[test]
fn nested_heading_levels_pop_to_matching_scope() {
    let lines = [
        "# # Header 1",
        "## ## Header 2",
        "### ### Header 3",
        "## ## Header 4",
        "### ### Header 5",
        "### ### Header 5.1",
        "### ### Header 5.2",
        "## ## Header 6",
        "### ### Header 6",
        "### ### Header 6.1",
        "### ### Header 6.2",
        "# # Header 7",
    ];
    assert_eq!(
        parse(&lines),
        vec![
            heading(
                1,
                "# Header 1",
                vec![
                    heading(
                        2,
                        "## Header 2",
                        vec![heading(3, "### Header 3", vec![])]
                    ),
                    heading(
                        2,
                        "## Header 4",
                        vec![
                            heading(3, "### Header 5", vec![]),
                            heading(3, "### Header 5.1", vec![]),
                            heading(3, "### Header 5.2", vec![]),
                        ]
                    ),
                    heading(
                        2,
                        "## Header 6",
                        vec![
                            heading(3, "### Header 6", vec![]),
                            heading(3, "### Header 6.1", vec![]),
                            heading(3, "### Header 6.2", vec![]),
                        ]
                    ),
                ]
            ),
            heading(1, "# Header 7", vec![]),
        ]
    );
}

#[test]
fn adjacent_rows_merge_into_one_table() {
    assert_eq!(parse(&["|a|", "|b|"]), vec![table(&["|a|", "|b|"])]);
}

#[test]
fn interrupted_table_stays_split() {
    assert_eq!(
        parse(&["|a|", "text", "|a|"]),
        vec![table(&["|a|"]), para(&["text"]), table(&["|a|"])]
    );
}

#[test]
fn shallower_heading_after_deep_content_pops_past_blocks() {
    assert_eq!(
        parse(&["# A", "## B", "### C", "|x|", "## D", "text"]),
        vec![heading(
            1,
            "A",
            vec![
                heading(2, "B", vec![heading(3, "C", vec![table(&["|x|"])])]),
                heading(2, "D", vec![para(&["text"])]),
            ]
        )]
    );
}

#[test]
fn skipped_levels_still_nest() {
    assert_eq!(
        parse(&["### deep", "# top", "### child"]),
        vec![
            heading(3, "deep", vec![]),
            heading(1, "top", vec![heading(3, "child", vec![])]),
        ]
    );
}

#[test]
fn preamble_text_attaches_to_root() {
    assert_eq!(
        parse(&["intro", "more intro", "# A"]),
        vec![para(&["intro", "more intro"]), heading(1, "A", vec![])]
    );
}

#[test]
fn empty_caption_is_invalid_structure() {
    let err = parse_lines(["# A", "# "], &ParseOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidStructure {
            line_number: 2,
            marker: "#"
        }
    );
}

#[test]
fn blank_lines_merge_into_paragraph_by_default() {
    assert_eq!(
        parse(&["# A", "", "first", "", "second"]),
        vec![heading(1, "A", vec![para(&["", "first", "", "second"])])]
    );
}

#[test]
fn blank_lines_can_be_skipped() {
    let options = ParseOptions {
        blank_lines: BlankLines::Skip,
        ..ParseOptions::default()
    };
    let tree = parse_str("# A\n\n|a|\n\n|b|\n", &options).unwrap();
    assert_eq!(
        snapshot::normalize(&tree).children,
        vec![heading(1, "A", vec![table(&["|a|", "|b|"])])]
    );
}

#[test]
fn crlf_input_is_trimmed() {
    let tree = parse_str("# A\r\n|a|\r\n", &ParseOptions::default()).unwrap();
    assert_eq!(
        snapshot::normalize(&tree).children,
        vec![heading(1, "A", vec![table(&["|a|"])])]
    );
}

#[test]
fn dump_matches_outline_format() {
    let lines = [
        "# Header 1",
        "|name|age|",
        "|x|1|",
        "|y|2|",
        "## Header 1.1",
        "this is text",
        "fields and lines",
        "|name|age|",
        "|x|1|",
        "|y|2|",
        "# Header 2",
        "this is text about",
        "some topic ",
    ];
    let tree = parse_lines(lines, &ParseOptions::default()).unwrap();

    let expected = "\
root
---- Header 1
---- ---- Table
---- ---- |name|age|
---- ---- |x|1|
---- ---- |y|2|
---- ---- Header 1.1
---- ---- ---- Text
---- ---- ---- this is text
---- ---- ---- fields and lines
---- ---- ---- Table
---- ---- ---- |name|age|
---- ---- ---- |x|1|
---- ---- ---- |y|2|
---- Header 2
---- ---- Text
---- ---- this is text about
---- ---- some topic";

    assert_eq!(dump(&tree, DEFAULT_INDENT), expected);
}
