//! Chunk records handed to the downstream chunk store and vector index.
//!
//! The store keeps chunk text plus a flat string metadata map; this module
//! produces exactly that from a parsed tree and knows nothing about the
//! store itself.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::parsing::{BlockKind, Chunk, DocTree, flatten};

/// Metadata key holding the source document path.
pub const FULLPATH_KEY: &str = "fullpath";
/// Metadata key holding the source page; markdown has none.
pub const PAGE_KEY: &str = "page";
/// Page value for sources without pages.
pub const NO_PAGE: &str = "n/a";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkRecord {
    /// Block lines joined with `\n`.
    pub text: String,
    /// Header path joined with the chosen delimiter; empty at top level.
    pub headers: String,
    pub kind: BlockKind,
    pub metadata: BTreeMap<String, String>,
}

impl ChunkRecord {
    pub fn from_chunk(chunk: &Chunk<'_>, fullpath: &str, delimiter: &str) -> Self {
        let metadata = BTreeMap::from([
            (FULLPATH_KEY.to_string(), fullpath.to_string()),
            (PAGE_KEY.to_string(), NO_PAGE.to_string()),
        ]);
        Self {
            text: chunk.text(),
            headers: chunk.header_path_joined(delimiter),
            kind: chunk.block.kind(),
            metadata,
        }
    }

    /// Text as stored for retrieval: the header path on its own line, then
    /// the block. Top-level blocks are stored as-is.
    #[must_use]
    pub fn content(&self) -> String {
        if self.headers.is_empty() {
            self.text.clone()
        } else {
            format!("{}\n{}", self.headers, self.text)
        }
    }
}

/// One record per content block, in document order.
pub fn chunk_records(tree: &DocTree, fullpath: &str, delimiter: &str) -> Vec<ChunkRecord> {
    flatten(tree)
        .map(|chunk| ChunkRecord::from_chunk(&chunk, fullpath, delimiter))
        .collect()
}
