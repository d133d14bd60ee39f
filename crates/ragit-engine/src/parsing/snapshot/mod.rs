//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via structural comparisons and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a [`DocTree`](crate::parsing::DocTree) into a nested,
//!   serializable `Snap` that ignores arena ids
//! - **`invariants`**: Runtime checks for tree well-formedness (containment order,
//!   mirrored parent links, no adjacent same-kind blocks)
//!
//! Golden dumps of fixture documents are compared with `insta`; see
//! `tests/parsing_snapshots.rs`.

pub mod invariants;
pub mod normalize;

pub use invariants::{check as invariants, violations};
pub use normalize::{Snap, SnapNode, normalize};
