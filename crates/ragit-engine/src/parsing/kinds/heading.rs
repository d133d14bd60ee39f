use crate::parsing::tree::HeadingLevel;

/// ATX heading type with owned marker knowledge.
///
/// Only the three levels the document tree models are recognised; `####`
/// and deeper fall through to plain text.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// Splits a trimmed line into its heading level and caption.
    ///
    /// A marker must be followed by a space (`# Title`). A bare marker
    /// (`#`, `##`, `###`) is still reported as a heading, with an empty
    /// caption, so the builder can reject it instead of treating it as text.
    ///
    /// # Returns
    /// - `Some((level, caption))` with the caption trimmed
    /// - `None` if the line is not a level 1–3 heading
    pub fn strip_marker(trimmed: &str) -> Option<(HeadingLevel, &str)> {
        HeadingLevel::ALL.into_iter().find_map(|level| {
            let marker = level.marker();
            if trimmed == marker {
                return Some((level, ""));
            }
            trimmed
                .strip_prefix(marker)
                .filter(|rest| rest.starts_with(' '))
                .map(|rest| (level, rest.trim()))
        })
    }
}
