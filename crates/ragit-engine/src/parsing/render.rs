//! Text renderings of a tree.
//!
//! - [`dump`]: depth-indented outline used for golden-file comparisons
//! - [`to_markdown`]: markdown that parses back into the same tree
//! - [`from_chunks`]: markdown rebuilt from flattened chunks only
//!
//! Markdown output ends every line with `\n`, so a trailing blank paragraph
//! line survives `str::lines`.

use super::{
    flatten::Chunk,
    tree::{DocTree, NodeId, NodeKind},
};

/// Indent marker repeated once per depth level in [`dump`].
pub const DEFAULT_INDENT: &str = "---- ";

/// Renders one line per node, prefixed by `marker` repeated `depth` times.
///
/// Headings show their caption, the root shows `root`. Blocks show a
/// `Text` or `Table` label followed by their lines at the same depth.
/// Lines are right-trimmed.
pub fn dump(tree: &DocTree, marker: &str) -> String {
    let mut out = Vec::new();
    let mut stack = vec![(tree.root(), 0usize)];

    while let Some((id, depth)) = stack.pop() {
        let Some(kind) = tree.kind(id) else {
            continue;
        };
        let prefix = marker.repeat(depth);
        let mut emit = |text: &str| out.push(format!("{prefix}{text}").trim_end().to_string());

        emit(kind.label());
        for line in kind.lines().unwrap_or_default() {
            emit(line);
        }

        stack.extend(tree.children(id).iter().rev().map(|c| (*c, depth + 1)));
    }

    out.join("\n")
}

/// Re-emits the tree as markdown in document order.
pub fn to_markdown(tree: &DocTree) -> String {
    let mut out = Vec::new();
    let mut stack: Vec<NodeId> = vec![tree.root()];

    while let Some(id) = stack.pop() {
        match tree.kind(id) {
            Some(NodeKind::Heading { level, caption }) => {
                out.push(format!("{} {caption}", level.marker()));
            }
            Some(NodeKind::Paragraph { lines }) => out.extend(lines.iter().cloned()),
            Some(NodeKind::Table { rows }) => out.extend(rows.iter().cloned()),
            Some(NodeKind::Root) | None => {}
        }
        stack.extend(tree.children(id).iter().rev().copied());
    }

    terminate_lines(&out)
}

/// Rebuilds markdown from flattened chunks.
///
/// A heading line is emitted whenever a chunk's header chain leaves the
/// previous chunk's chain; headings are compared by node id so repeated
/// captions stay distinct. Headings that own no block never appear in
/// flattened output and are not reconstructed.
pub fn from_chunks<'a, I>(chunks: I) -> String
where
    I: IntoIterator<Item = Chunk<'a>>,
{
    let mut out = Vec::new();
    let mut open: Vec<NodeId> = Vec::new();

    for chunk in chunks {
        let shared = open
            .iter()
            .zip(&chunk.headers)
            .take_while(|(id, header)| **id == header.id)
            .count();

        for header in chunk.headers.iter().skip(shared) {
            out.push(format!("{} {}", header.level.marker(), header.caption));
        }
        open = chunk.headers.iter().map(|h| h.id).collect();
        out.extend(chunk.block.lines().iter().cloned());
    }

    terminate_lines(&out)
}

fn terminate_lines(lines: &[String]) -> String {
    lines.iter().map(|l| format!("{l}\n")).collect()
}
