//! UniFFI bindings for the ragit markdown engine
//!
//! Exposes parsing, the tree dump and chunk records to host-language
//! ingestion pipelines.

use ragit_engine::{
    BlockKind, ChunkRecord, DocTree, HEADER_DELIMITER, ParseOptions, chunk_records,
    parsing::render::{DEFAULT_INDENT, dump},
    parse_str,
};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Parse error: {reason}")]
    ParseError { reason: String },
}

// ============ Document Handle ============

/// A parsed markdown document.
///
/// The tree is immutable once built, so the handle needs no lock.
#[derive(uniffi::Object)]
pub struct DocumentHandle {
    tree: DocTree,
}

#[uniffi::export]
impl DocumentHandle {
    /// Parse markdown content with default options.
    #[uniffi::constructor]
    pub fn from_string(content: String) -> Result<Self, FfiError> {
        Ok(Self {
            tree: parse(&content)?,
        })
    }

    /// Depth-indented outline of the tree.
    pub fn dump(&self) -> String {
        dump(&self.tree, DEFAULT_INDENT)
    }

    /// Chunk records in document order, tagged with `fullpath`.
    pub fn chunks(&self, fullpath: String) -> Vec<ChunkDto> {
        records(&self.tree, &fullpath)
    }
}

// ============ DTOs ============

/// One content block with its header path.
#[derive(Debug, uniffi::Record)]
pub struct ChunkDto {
    /// Header path joined with ` => `; empty for top-level blocks
    pub headers: String,
    /// Block lines joined with newlines
    pub text: String,
    /// Header path line followed by the block, as stored for retrieval
    pub content: String,
    /// "paragraph" or "table"
    pub kind: String,
    /// Source path and page metadata
    pub metadata: Vec<MetadataEntry>,
}

#[derive(Debug, uniffi::Record)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

impl ChunkDto {
    fn from_engine(record: ChunkRecord) -> Self {
        let kind = match record.kind {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Table => "table",
        };
        Self {
            content: record.content(),
            headers: record.headers,
            text: record.text,
            kind: kind.to_string(),
            metadata: record
                .metadata
                .into_iter()
                .map(|(key, value)| MetadataEntry { key, value })
                .collect(),
        }
    }
}

// ============ Standalone Functions ============

/// Parse `content` and return its chunk records in one call.
#[uniffi::export]
pub fn parse_chunks(content: String, fullpath: String) -> Result<Vec<ChunkDto>, FfiError> {
    Ok(records(&parse(&content)?, &fullpath))
}

fn parse(content: &str) -> Result<DocTree, FfiError> {
    parse_str(content, &ParseOptions::default()).map_err(|e| FfiError::ParseError {
        reason: e.to_string(),
    })
}

fn records(tree: &DocTree, fullpath: &str) -> Vec<ChunkDto> {
    chunk_records(tree, fullpath, HEADER_DELIMITER)
        .into_iter()
        .map(ChunkDto::from_engine)
        .collect()
}
