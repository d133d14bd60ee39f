//! Linearises a finished tree into header-qualified content chunks.

use super::tree::{BlockKind, DocTree, HeadingLevel, NodeId, NodeKind};

/// Separator used when a header path is rendered as one string.
pub const HEADER_DELIMITER: &str = " => ";

/// An enclosing heading of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderRef<'a> {
    pub id: NodeId,
    pub level: HeadingLevel,
    pub caption: &'a str,
}

/// Borrowed view of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRef<'a> {
    Paragraph(&'a [String]),
    Table(&'a [String]),
}

impl<'a> BlockRef<'a> {
    #[must_use]
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockRef::Paragraph(_) => BlockKind::Paragraph,
            BlockRef::Table(_) => BlockKind::Table,
        }
    }

    #[must_use]
    pub fn lines(&self) -> &'a [String] {
        match *self {
            BlockRef::Paragraph(lines) | BlockRef::Table(lines) => lines,
        }
    }

    /// Block content joined with `\n`.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

/// One content block together with the headings that enclose it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// The block's node.
    pub id: NodeId,
    /// Enclosing headings, outermost first.
    pub headers: Vec<HeaderRef<'a>>,
    pub block: BlockRef<'a>,
}

impl<'a> Chunk<'a> {
    /// Heading captions, outermost first.
    #[must_use]
    pub fn header_path(&self) -> Vec<&'a str> {
        self.headers.iter().map(|h| h.caption).collect()
    }

    #[must_use]
    pub fn header_path_joined(&self, delimiter: &str) -> String {
        self.header_path().join(delimiter)
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.block.text()
    }
}

/// Pre-order, left-to-right iterator over the content blocks of a tree.
///
/// Read-only; calling [`flatten`] again on the same tree yields the same
/// sequence.
pub struct Flatten<'a> {
    tree: &'a DocTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some(id) = self.stack.pop() {
            self.stack.extend(tree.children(id).iter().rev().copied());

            let block = match tree.kind(id) {
                Some(NodeKind::Paragraph { lines }) => BlockRef::Paragraph(lines),
                Some(NodeKind::Table { rows }) => BlockRef::Table(rows),
                _ => continue,
            };

            return Some(Chunk {
                id,
                headers: headers_of(tree, id),
                block,
            });
        }
        None
    }
}

pub fn flatten(tree: &DocTree) -> Flatten<'_> {
    Flatten {
        tree,
        stack: vec![tree.root()],
    }
}

impl DocTree {
    /// Shorthand for [`flatten`].
    pub fn chunks(&self) -> Flatten<'_> {
        flatten(self)
    }
}

fn headers_of(tree: &DocTree, id: NodeId) -> Vec<HeaderRef<'_>> {
    let mut headers: Vec<_> = tree
        .ancestors(id)
        .filter_map(|a| match tree.kind(a) {
            Some(NodeKind::Heading { level, caption }) => Some(HeaderRef {
                id: a,
                level: *level,
                caption,
            }),
            _ => None,
        })
        .collect();
    headers.reverse();
    headers
}
