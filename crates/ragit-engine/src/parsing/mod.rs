//! # Markdown Structure Parsing
//!
//! Two-phase parsing of markdown lines into a heading tree.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineKind`
//!    (heading 1–3, table row, text line) from its prefix alone
//!
//! 2. **Tree Construction** (`builder`): A `TreeBuilder` keeps a cursor into the growing
//!    `DocTree`, popping up the ancestor chain until a node accepts the line
//!
//! The finished tree is read back through `flatten` (content blocks with their header
//! path) and `render` (textual dump, markdown).
//!
//! ## Key Invariants
//!
//! - A heading of level L only contains headings deeper than L, paragraphs and tables
//! - Paragraphs and tables contain nothing, and never sit next to a sibling of their kind
//! - The tree only grows by appending; parent links never change after insertion

pub mod builder;
pub mod classify;
pub mod error;
pub mod flatten;
pub mod kinds;
pub mod options;
pub mod render;
pub mod snapshot;
pub mod tree;

#[cfg(test)]
mod tests;

pub use builder::TreeBuilder;
pub use classify::{LineKind, MarkdownLineClassifier};
pub use error::ParseError;
pub use flatten::{BlockRef, Chunk, Flatten, HEADER_DELIMITER, HeaderRef, flatten};
pub use options::{BlankLines, InvalidHeadings, ParseOptions};
pub use tree::{BlockKind, Candidate, DocTree, HeadingLevel, Node, NodeId, NodeKind};

/// Builds a tree from a sequence of lines (trailing newlines already stripped
/// or left for trimming).
///
/// # Errors
/// Stops at the first [`ParseError`] unless the options skip invalid headings.
pub fn parse_lines<I, S>(lines: I, options: &ParseOptions) -> Result<DocTree, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = TreeBuilder::with_options(*options);
    for line in lines {
        builder.feed(line.as_ref())?;
    }
    Ok(builder.finish())
}

/// Builds a tree from an in-memory document, splitting on `\n` / `\r\n`.
///
/// # Errors
/// See [`parse_lines`].
pub fn parse_str(text: &str, options: &ParseOptions) -> Result<DocTree, ParseError> {
    parse_lines(text.lines(), options)
}
