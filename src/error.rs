//! Library error types

use thiserror::Error;

/// Errors returned by the byte inspector
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
    /// Requested byte offset lies outside `[0, len)`
    #[error("byte offset {index} out of range for text of {len} byte(s)")]
    OutOfRange { index: i64, len: usize },
}
