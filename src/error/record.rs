//! Error record types for validation failures.
//!
//! This module provides [`ErrorRecord`] for a single recorded failure and
//! [`CollectedErrors`] for the non-empty aggregate handed to downstream
//! reporting.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use stillwater::prelude::*;

use crate::context::ErrorContext;

/// A single recorded validation failure.
///
/// `ErrorRecord` captures everything downstream reporting needs:
/// - **property**: dot/bracket location (e.g. `users[0].email`; empty at root)
/// - **pointer**: canonical pointer location with the `#` prefix stripped
/// - **message**: fully interpolated, first letter capitalized
/// - **constraint**: stable identifier of the rule that failed
/// - **params**: the raw, uninterpolated extra arguments, insertion order kept
/// - **context**: bitmask tag of the validation phase that produced the error
///
/// # Example
///
/// ```rust
/// use faultline::{ErrorContext, ErrorRecord};
///
/// let record = ErrorRecord::new("name", "/name", "Must be at least 5 characters long")
///     .with_constraint("minLength")
///     .with_context(ErrorContext::DOCUMENT_VALIDATION);
///
/// assert_eq!(record.constraint, "minLength");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    /// Dot/bracket property path; empty string for the document root.
    pub property: String,
    /// Canonical pointer path without the leading `#`.
    pub pointer: String,
    /// Human-readable, interpolated message.
    pub message: String,
    /// Stable identifier of the constraint that failed (e.g. `minLength`).
    pub constraint: String,
    /// Raw extra parameters, keys preserved in insertion order.
    pub params: IndexMap<String, Value>,
    /// Validation phase/category that produced this error.
    pub context: ErrorContext,
}

impl ErrorRecord {
    /// Creates a new record with the given locations and message.
    ///
    /// The constraint identifier defaults to empty, the parameter map to
    /// empty, and the context to [`ErrorContext::NONE`]. Use the `with_*`
    /// methods to fill them in.
    pub fn new(
        property: impl Into<String>,
        pointer: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            property: property.into(),
            pointer: pointer.into(),
            message: message.into(),
            constraint: String::new(),
            params: IndexMap::new(),
            context: ErrorContext::NONE,
        }
    }

    /// Sets the constraint identifier and returns self for chaining.
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Sets the raw parameter map and returns self for chaining.
    pub fn with_params(mut self, params: IndexMap<String, Value>) -> Self {
        self.params = params;
        self
    }

    /// Sets the error context and returns self for chaining.
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = context;
        self
    }

    /// Renders this record in the external reporting shape.
    ///
    /// ```json
    /// {
    ///   "property": "...", "pointer": "...", "message": "...",
    ///   "constraint": { "name": "...", "params": { ... } },
    ///   "context": 1
    /// }
    /// ```
    pub fn to_json(&self) -> Value {
        let params: Map<String, Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        json!({
            "property": self.property,
            "pointer": self.pointer,
            "message": self.message,
            "constraint": {
                "name": self.constraint,
                "params": params,
            },
            "context": self.context.bits(),
        })
    }
}

impl Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = if self.property.is_empty() {
            "(root)"
        } else {
            &self.property
        };
        write!(f, "{}: {}", location, self.message)
    }
}

// ErrorRecord is Send + Sync since all fields are owned types.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErrorRecord>();
    assert_sync::<ErrorRecord>();
};

/// A non-empty collection of recorded validation failures.
///
/// `CollectedErrors` wraps a `NonEmptyVec<ErrorRecord>` so a failure result
/// always carries at least one error. It implements `Semigroup`, letting
/// results from independent sub-validations be combined.
///
/// # Example
///
/// ```rust
/// use faultline::{CollectedErrors, ErrorRecord};
/// use stillwater::prelude::*;
///
/// let first = CollectedErrors::single(ErrorRecord::new("name", "/name", "Required"));
/// let second = CollectedErrors::single(ErrorRecord::new("age", "/age", "Must be positive"));
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedErrors(NonEmptyVec<ErrorRecord>);

impl CollectedErrors {
    /// Creates a `CollectedErrors` containing a single record.
    pub fn single(record: ErrorRecord) -> Self {
        Self(NonEmptyVec::singleton(record))
    }

    /// Creates a `CollectedErrors` from a `NonEmptyVec` of records.
    pub fn from_non_empty(records: NonEmptyVec<ErrorRecord>) -> Self {
        Self(records)
    }

    /// Creates a `CollectedErrors` from a `Vec<ErrorRecord>`.
    ///
    /// Returns `None` if the vec is empty.
    pub fn from_vec(records: Vec<ErrorRecord>) -> Option<Self> {
        NonEmptyVec::from_vec(records).map(Self)
    }

    /// Returns the number of records in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false since this collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false // NonEmptyVec is never empty
    }

    /// Returns an iterator over the contained records.
    pub fn iter(&self) -> impl Iterator<Item = &ErrorRecord> {
        self.0.iter()
    }

    /// Returns the first record in the collection.
    pub fn first(&self) -> &ErrorRecord {
        self.0.head()
    }

    /// Returns all records whose context intersects the given filter.
    pub fn with_context(&self, filter: ErrorContext) -> Vec<&ErrorRecord> {
        self.0
            .iter()
            .filter(|r| r.context.intersects(filter))
            .collect()
    }

    /// Converts this collection into a `Vec<ErrorRecord>`.
    pub fn into_vec(self) -> Vec<ErrorRecord> {
        self.0.into_vec()
    }
}

impl Semigroup for CollectedErrors {
    fn combine(self, other: Self) -> Self {
        CollectedErrors(self.0.combine(other.0))
    }
}

impl Display for CollectedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, record) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, record)?;
        }
        Ok(())
    }
}

impl std::error::Error for CollectedErrors {}

impl IntoIterator for CollectedErrors {
    type Item = ErrorRecord;
    type IntoIter = std::vec::IntoIter<ErrorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a CollectedErrors {
    type Item = &'a ErrorRecord;
    type IntoIter = Box<dyn Iterator<Item = &'a ErrorRecord> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults() {
        let record = ErrorRecord::new("", "", "Value is invalid");
        assert_eq!(record.constraint, "");
        assert!(record.params.is_empty());
        assert_eq!(record.context, ErrorContext::NONE);
    }

    #[test]
    fn test_record_display_root() {
        let record = ErrorRecord::new("", "", "Value is null");
        assert_eq!(record.to_string(), "(root): Value is null");
    }

    #[test]
    fn test_record_display_nested() {
        let record = ErrorRecord::new("users[0].email", "/users/0/email", "Invalid format");
        assert_eq!(record.to_string(), "users[0].email: Invalid format");
    }

    #[test]
    fn test_record_to_json_shape() {
        let mut params = IndexMap::new();
        params.insert("min".to_string(), json!(5));

        let record = ErrorRecord::new("name", "/name", "Must be at least 5 characters long")
            .with_constraint("minLength")
            .with_params(params)
            .with_context(ErrorContext::DOCUMENT_VALIDATION);

        assert_eq!(
            record.to_json(),
            json!({
                "property": "name",
                "pointer": "/name",
                "message": "Must be at least 5 characters long",
                "constraint": { "name": "minLength", "params": { "min": 5 } },
                "context": 1,
            })
        );
    }

    #[test]
    fn test_collected_errors_combine() {
        let first = CollectedErrors::single(ErrorRecord::new("a", "/a", "Error 1"));
        let second = CollectedErrors::single(ErrorRecord::new("b", "/b", "Error 2"));

        let combined = first.combine(second);
        assert_eq!(combined.len(), 2);
        assert_eq!(combined.first().property, "a");
    }

    #[test]
    fn test_collected_errors_from_vec() {
        assert!(CollectedErrors::from_vec(Vec::new()).is_none());

        let errors =
            CollectedErrors::from_vec(vec![ErrorRecord::new("a", "/a", "Error 1")]).unwrap();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_collected_errors_display() {
        let errors = CollectedErrors::single(ErrorRecord::new("name", "/name", "Required"))
            .combine(CollectedErrors::single(ErrorRecord::new(
                "email", "/email", "Invalid",
            )));

        let display = errors.to_string();
        assert!(display.contains("2 error(s)"));
        assert!(display.contains("name: Required"));
        assert!(display.contains("email: Invalid"));
    }

    #[test]
    fn test_collected_errors_context_filter() {
        let doc = ErrorRecord::new("a", "/a", "Doc error")
            .with_context(ErrorContext::DOCUMENT_VALIDATION);
        let schema =
            ErrorRecord::new("b", "/b", "Schema error").with_context(ErrorContext::SCHEMA_VALIDATION);

        let errors = CollectedErrors::single(doc).combine(CollectedErrors::single(schema));

        let docs = errors.with_context(ErrorContext::DOCUMENT_VALIDATION);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].property, "a");
    }
}
