//! The fast-fail error raised when exception mode is active.

/// Raised by [`ErrorCollector::add_error`](crate::ErrorCollector::add_error)
/// when exception mode is enabled: the violation aborts the validation call
/// chain instead of being accumulated, and the record is never stored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Error validating {pointer}: {message}")]
pub struct ValidationFailure {
    /// Canonical pointer path of the failing location, `#` prefix stripped.
    pub pointer: String,
    /// The interpolated message the record would have carried.
    pub message: String,
}
