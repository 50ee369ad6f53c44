//! Caret offset parsing.

use crate::error::DomError;

/// Parse a caret offset supplied as text.
///
/// Surrounding ASCII whitespace is ignored. Anything else that is not a
/// non-negative base-10 integer is rejected, including negative numbers and
/// trailing garbage such as `"5px"`.
pub fn parse_caret_offset(input: &str) -> Result<usize, DomError> {
    input
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .parse::<usize>()
        .map_err(|source| DomError::InvalidOffset {
            input: input.to_string(),
            source,
        })
}
