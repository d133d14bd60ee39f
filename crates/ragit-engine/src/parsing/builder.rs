use log::{debug, trace, warn};

use super::{
    classify::{LineKind, MarkdownLineClassifier},
    error::ParseError,
    options::{BlankLines, InvalidHeadings, ParseOptions},
    tree::{BlockKind, Candidate, DocTree, HeadingLevel, NodeId, NodeKind},
};

/// Grows a [`DocTree`] one line at a time.
///
/// The builder keeps a cursor: the node the next line tries to attach to.
/// When the cursor cannot accept a line, the cursor pops up through its
/// ancestors until one can. The root accepts everything, so every line
/// lands somewhere.
///
/// `feed` takes `&mut self`; one builder is driven by one caller at a time.
/// Independent builders share nothing.
pub struct TreeBuilder {
    classifier: MarkdownLineClassifier,
    options: ParseOptions,
    tree: DocTree,
    cursor: NodeId,
    lines_seen: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            options,
            tree: DocTree::new(),
            cursor: NodeId::ROOT,
            lines_seen: 0,
        }
    }

    /// Classifies and inserts one line.
    ///
    /// # Errors
    /// [`ParseError::InvalidStructure`] for a heading with an empty caption,
    /// unless [`InvalidHeadings::Skip`] is set. The tree and cursor are
    /// unchanged on error.
    pub fn feed(&mut self, line: &str) -> Result<(), ParseError> {
        let kind = self.classifier.classify(line);
        self.push(kind)
    }

    /// Inserts an already classified line.
    ///
    /// Counts towards line numbers exactly like [`feed`](Self::feed).
    pub fn push(&mut self, kind: LineKind) -> Result<(), ParseError> {
        self.lines_seen += 1;

        if kind.is_blank() && self.options.blank_lines == BlankLines::Skip {
            return Ok(());
        }

        match kind {
            LineKind::Heading { level, caption } => match self.open_heading(level, caption) {
                Err(err) if self.options.invalid_headings == InvalidHeadings::Skip => {
                    warn!("skipping heading: {err}");
                    Ok(())
                }
                res => res,
            },
            LineKind::TableRow(row) => {
                self.extend_block(BlockKind::Table, row);
                Ok(())
            }
            LineKind::TextLine(text) => {
                self.extend_block(BlockKind::Paragraph, text);
                Ok(())
            }
        }
    }

    /// The node the next line will try first.
    #[must_use]
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// The tree built so far.
    #[must_use]
    pub fn tree(&self) -> &DocTree {
        &self.tree
    }

    /// Consumes the builder, dropping the cursor.
    pub fn finish(self) -> DocTree {
        debug!(
            "parsed {} lines into {} nodes",
            self.lines_seen,
            self.tree.node_count()
        );
        self.tree
    }

    fn open_heading(&mut self, level: HeadingLevel, caption: String) -> Result<(), ParseError> {
        if caption.is_empty() {
            return Err(ParseError::InvalidStructure {
                line_number: self.lines_seen,
                marker: level.marker(),
            });
        }

        let parent = self.attachment_point(Candidate::Heading(level));
        self.cursor = self
            .tree
            .append(parent, NodeKind::Heading { level, caption });
        Ok(())
    }

    /// Merges into the open block of the same kind, or starts a new one.
    ///
    /// A new block becomes the cursor so the next same-kind line merges
    /// into it; any other line pops straight past it since blocks accept
    /// nothing.
    fn extend_block(&mut self, kind: BlockKind, line: String) {
        if let Some(open) = self.tree.kind_mut(self.cursor)
            && open.block_kind() == Some(kind)
        {
            open.push_line(line);
            return;
        }

        let parent = self.attachment_point(Candidate::Block(kind));
        self.cursor = self.tree.append(parent, NodeKind::new_block(kind, line));
    }

    /// Finds the nearest node on the cursor's ancestor chain (cursor first)
    /// that accepts `candidate`.
    fn attachment_point(&self, candidate: Candidate) -> NodeId {
        let found = std::iter::once(self.cursor)
            .chain(self.tree.ancestors(self.cursor))
            .enumerate()
            .find(|(_, id)| {
                self.tree
                    .kind(*id)
                    .is_some_and(|kind| kind.accepts(candidate))
            });

        match found {
            Some((pops, id)) => {
                if pops > 0 {
                    trace!("popped {pops} level(s) to attach {candidate:?}");
                }
                id
            }
            None => self.tree.root(),
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(builder: &mut TreeBuilder, lines: &[&str]) {
        for line in lines {
            builder.feed(line).unwrap();
        }
    }

    #[test]
    fn heading_becomes_cursor() {
        let mut builder = TreeBuilder::new();
        builder.feed("# Title").unwrap();
        let cursor = builder.cursor();
        assert!(matches!(
            builder.tree().kind(cursor),
            Some(NodeKind::Heading {
                level: HeadingLevel::H1,
                ..
            })
        ));
    }

    #[test]
    fn new_block_becomes_cursor_for_merges() {
        let mut builder = TreeBuilder::new();
        feed_all(&mut builder, &["# Title", "|a|"]);
        let table = builder.cursor();
        builder.feed("|b|").unwrap();
        assert_eq!(builder.cursor(), table);
        assert_eq!(
            builder.tree().kind(table).and_then(NodeKind::lines),
            Some(&["|a|".to_string(), "|b|".to_string()][..])
        );
    }

    #[test]
    fn same_level_heading_pops_once() {
        let mut builder = TreeBuilder::new();
        feed_all(&mut builder, &["## A"]);
        let first = builder.cursor();
        builder.feed("## B").unwrap();
        let second = builder.cursor();
        assert_eq!(builder.tree().parent(first), Some(NodeId::ROOT));
        assert_eq!(builder.tree().parent(second), Some(NodeId::ROOT));
    }

    #[test]
    fn heading_after_block_attaches_to_enclosing_heading() {
        let mut builder = TreeBuilder::new();
        feed_all(&mut builder, &["# A", "text", "## B"]);
        let b = builder.cursor();
        let a = builder.tree().children(NodeId::ROOT)[0];
        assert_eq!(builder.tree().parent(b), Some(a));
    }

    #[test]
    fn empty_caption_leaves_state_untouched() {
        let mut builder = TreeBuilder::new();
        feed_all(&mut builder, &["# A", "text"]);
        let before = builder.tree().clone();
        let cursor = builder.cursor();

        let err = builder.feed("## ").unwrap_err();

        assert_eq!(
            err,
            ParseError::InvalidStructure {
                line_number: 3,
                marker: "##"
            }
        );
        assert_eq!(builder.tree(), &before);
        assert_eq!(builder.cursor(), cursor);

        // the open paragraph is still open
        builder.feed("more").unwrap();
        assert_eq!(builder.tree().node_count(), before.node_count());
    }

    #[test]
    fn skip_invalid_headings_continues() {
        let mut builder = TreeBuilder::with_options(ParseOptions {
            invalid_headings: InvalidHeadings::Skip,
            ..ParseOptions::default()
        });
        feed_all(&mut builder, &["# A", "#", "text"]);
        let tree = builder.finish();
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn skip_blank_lines() {
        let mut builder = TreeBuilder::with_options(ParseOptions {
            blank_lines: BlankLines::Skip,
            ..ParseOptions::default()
        });
        feed_all(&mut builder, &["|a|", "", "|b|"]);
        let tree = builder.finish();
        assert_eq!(tree.children(NodeId::ROOT).len(), 1);
    }

    #[test]
    fn keep_blank_lines_splits_tables() {
        let mut builder = TreeBuilder::new();
        feed_all(&mut builder, &["|a|", "", "|b|"]);
        let tree = builder.finish();
        let kinds: Vec<_> = tree
            .children(NodeId::ROOT)
            .iter()
            .filter_map(|id| tree.kind(*id).and_then(NodeKind::block_kind))
            .collect();
        assert_eq!(
            kinds,
            vec![BlockKind::Table, BlockKind::Paragraph, BlockKind::Table]
        );
    }
}
