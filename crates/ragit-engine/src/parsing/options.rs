use serde::{Deserialize, Serialize};

/// How whitespace-only lines are treated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankLines {
    /// Blank lines are empty text lines and merge into the open paragraph.
    #[default]
    Keep,
    /// Blank lines are dropped before classification.
    Skip,
}

/// What to do with a heading whose caption is empty.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidHeadings {
    /// Return [`ParseError::InvalidStructure`](super::ParseError::InvalidStructure).
    #[default]
    Reject,
    /// Log a warning, drop the line and keep going.
    Skip,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub blank_lines: BlankLines,
    pub invalid_headings: InvalidHeadings,
}
