/// Pipe table row type with owned delimiter constant.
///
/// Rows are kept verbatim; cells are never split.
pub struct TableRow;

impl TableRow {
    /// The cell delimiter that must open and close a row.
    pub const DELIMITER: char = '|';

    /// Returns true if the trimmed line both starts and ends with `|`.
    pub fn matches(trimmed: &str) -> bool {
        trimmed.starts_with(Self::DELIMITER) && trimmed.ends_with(Self::DELIMITER)
    }
}
