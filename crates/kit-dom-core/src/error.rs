//! Error types for widget DOM operations.

use std::num::ParseIntError;

use thiserror::Error;

use crate::platform::PlatformError;

/// Reasons a caret or resize operation did not take effect.
///
/// None of these are surfaced to the page: callers log them and carry on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DomError {
    /// No element with this id is attached to the document.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// The caret offset was not a non-negative integer.
    #[error("invalid caret offset {input:?}: {source}")]
    InvalidOffset {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// The platform rejected the operation.
    #[error("platform error: {0}")]
    Platform(#[from] PlatformError),
}
