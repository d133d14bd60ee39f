#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A heading marker with nothing after it. The builder is left untouched.
    #[error("invalid structure at line {line_number}: `{marker}` heading has an empty caption")]
    InvalidStructure {
        /// 1-based position of the line in the fed input.
        line_number: usize,
        marker: &'static str,
    },
}
