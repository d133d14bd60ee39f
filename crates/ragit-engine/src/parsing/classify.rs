use super::{
    kinds::{Heading, TableRow},
    tree::{BlockKind, Candidate, HeadingLevel},
};

/// Semantic kind of a single input line.
///
/// This is phase 1 of parsing: each line is classified on its own, without
/// reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `#`, `##` or `###` heading. Caption is marker-stripped and trimmed;
    /// it may be empty, which the builder rejects.
    Heading { level: HeadingLevel, caption: String },
    /// A `|...|` row, trimmed.
    TableRow(String),
    /// Anything else, trimmed. Blank lines are empty text lines.
    TextLine(String),
}

impl LineKind {
    /// What the builder will try to attach for this line.
    #[must_use]
    pub fn candidate(&self) -> Candidate {
        match self {
            LineKind::Heading { level, .. } => Candidate::Heading(*level),
            LineKind::TableRow(_) => Candidate::Block(BlockKind::Table),
            LineKind::TextLine(_) => Candidate::Block(BlockKind::Paragraph),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, LineKind::TextLine(text) if text.is_empty())
    }
}

/// Classifies individual lines for the tree building phase.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineKind`].
    ///
    /// Rules are checked in order against the trimmed line: heading markers
    /// (`# `, `## `, `### `), then `|...|` table rows, then plain text.
    /// Never fails.
    pub fn classify(&self, line: &str) -> LineKind {
        let trimmed = line.trim();

        if let Some((level, caption)) = Heading::strip_marker(trimmed) {
            return LineKind::Heading {
                level,
                caption: caption.to_string(),
            };
        }

        if TableRow::matches(trimmed) {
            return LineKind::TableRow(trimmed.to_string());
        }

        LineKind::TextLine(trimmed.to_string())
    }
}
