//! Error context bitmasks for classifying validation failures.
//!
//! Every recorded error carries an [`ErrorContext`] identifying which
//! validation phase produced it. Contexts combine with `|` and are tested
//! with [`ErrorContext::intersects`], which is how filtered retrieval on
//! the collector works without re-scanning records.

use std::fmt::{self, Display};
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// A bitmask tag identifying which validation phase produced an error.
///
/// # Example
///
/// ```rust
/// use faultline::ErrorContext;
///
/// let mask = ErrorContext::DOCUMENT_VALIDATION | ErrorContext::SCHEMA_VALIDATION;
/// assert!(mask.intersects(ErrorContext::SCHEMA_VALIDATION));
/// assert!(!ErrorContext::NONE.intersects(mask));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ErrorContext(u32);

impl ErrorContext {
    /// No context. Contributes nothing when merged into a mask.
    pub const NONE: ErrorContext = ErrorContext(0);
    /// Errors found while validating a document against a schema.
    pub const DOCUMENT_VALIDATION: ErrorContext = ErrorContext(1);
    /// Errors found while validating a schema itself.
    pub const SCHEMA_VALIDATION: ErrorContext = ErrorContext(1 << 1);
    /// Sentinel matching every context; retrieval with `ALL` is unfiltered.
    pub const ALL: ErrorContext = ErrorContext(u32::MAX);

    /// Creates a context from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        ErrorContext(bits)
    }

    /// Returns the raw bits of this context.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if no bits are set.
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this context shares any bit with `other`.
    pub const fn intersects(self, other: ErrorContext) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for ErrorContext {
    type Output = ErrorContext;

    fn bitor(self, rhs: ErrorContext) -> ErrorContext {
        ErrorContext(self.0 | rhs.0)
    }
}

impl BitOrAssign for ErrorContext {
    fn bitor_assign(&mut self, rhs: ErrorContext) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ErrorContext {
    type Output = ErrorContext;

    fn bitand(self, rhs: ErrorContext) -> ErrorContext {
        ErrorContext(self.0 & rhs.0)
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
