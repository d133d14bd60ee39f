pub mod ingest;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use ingest::{ChunkRecord, chunk_records};
pub use parsing::{
    BlankLines, BlockKind, BlockRef, Chunk, DocTree, HEADER_DELIMITER, HeadingLevel,
    InvalidHeadings, NodeId, NodeKind, ParseError, ParseOptions, TreeBuilder, flatten,
    parse_lines, parse_str,
};
