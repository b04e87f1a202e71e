//! The error collector.
//!
//! This module provides [`ErrorCollector`], the accumulation point every
//! constraint-checking routine reports violations to, and that the driving
//! validator queries afterwards for pass/fail and diagnostics.

use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;
use stillwater::Validation;

use crate::config::ConfigProvider;
use crate::constraint::ConstraintDescriptor;
use crate::context::ErrorContext;
use crate::error::{CollectedErrors, ErrorRecord, ValidationFailure};
use crate::pointer::Pointer;

/// Accumulates structured validation errors for one validation session.
///
/// Constraint checks report violations via [`add_error`](Self::add_error);
/// nested sub-validation results merge in via [`add_errors`](Self::add_errors).
/// The collector derives locations from pointers, interpolates message
/// templates, and tracks a cumulative context mask so filtered retrieval
/// never re-scans records.
///
/// The injected [`ConfigProvider`] decides, per session, whether the first
/// violation aborts validation: in exception mode `add_error` returns
/// `Err(ValidationFailure)` and stores nothing, otherwise it appends the
/// record and returns `Ok(())`.
///
/// # Example
///
/// ```rust
/// use faultline::{CollectorConfig, ConstraintError, ErrorCollector, ErrorContext, Pointer};
/// use indexmap::IndexMap;
/// use serde_json::json;
///
/// let mut collector = ErrorCollector::new(CollectorConfig::new().into_shared());
///
/// let path = Pointer::root().push_property("name");
/// let mut params = IndexMap::new();
/// params.insert("min".to_string(), json!(5));
///
/// collector
///     .add_error(Some(&ConstraintError::MinLength), Some(&path), params)
///     .unwrap();
///
/// assert!(!collector.is_valid());
/// assert_eq!(collector.num_errors(ErrorContext::ALL), 1);
/// assert_eq!(
///     collector.get_errors(ErrorContext::ALL)[0].message,
///     "Must be at least 5 characters long"
/// );
/// ```
pub struct ErrorCollector {
    config: Arc<dyn ConfigProvider>,
    errors: Vec<ErrorRecord>,
    error_mask: ErrorContext,
}

impl ErrorCollector {
    /// Creates an empty collector driven by the given configuration.
    pub fn new(config: Arc<dyn ConfigProvider>) -> Self {
        Self {
            config,
            errors: Vec::new(),
            error_mask: ErrorContext::NONE,
        }
    }

    /// Records a newly detected violation.
    ///
    /// An absent `descriptor` behaves as an empty-identifier, empty-template
    /// rule; an absent `path` is the document root. The values of `params`
    /// are substituted positionally into the descriptor's template in the
    /// map's insertion order, and the raw map is kept on the record.
    ///
    /// # Errors
    ///
    /// In exception mode, returns a [`ValidationFailure`] carrying
    /// `Error validating <pointer>: <message>`; nothing is stored.
    pub fn add_error(
        &mut self,
        descriptor: Option<&dyn ConstraintDescriptor>,
        path: Option<&Pointer>,
        params: IndexMap<String, Value>,
    ) -> Result<(), ValidationFailure> {
        let (template, identifier) = match descriptor {
            Some(descriptor) => (descriptor.message_template(), descriptor.identifier_value()),
            None => ("", ""),
        };

        let root = Pointer::root();
        let path = path.unwrap_or(&root);
        let message = capitalize_first(&interpolate(template, params.values()));

        if self.config.exception_mode_enabled() {
            return Err(ValidationFailure {
                pointer: path.pointer_path(),
                message,
            });
        }

        let context = self.config.current_error_context();
        self.error_mask |= context;
        self.errors.push(ErrorRecord {
            property: path.property_path(),
            pointer: path.pointer_path(),
            message,
            constraint: identifier.to_string(),
            params,
            context,
        });
        Ok(())
    }

    /// Merges already-built records from a nested sub-validation.
    ///
    /// Relative order is preserved and every record's context is OR-ed into
    /// the cumulative mask ([`ErrorContext::NONE`] contributes nothing).
    /// Bulk merges never fail, even in exception mode: this path aggregates
    /// sub-validator results, it does not detect new local violations.
    pub fn add_errors(&mut self, records: impl IntoIterator<Item = ErrorRecord>) {
        for record in records {
            self.error_mask |= record.context;
            self.errors.push(record);
        }
    }

    /// Returns stored errors, optionally filtered by context.
    ///
    /// [`ErrorContext::ALL`] returns the full sequence unfiltered; any other
    /// filter returns the order-preserving subsequence whose context shares
    /// at least one bit with it.
    pub fn get_errors(&self, filter: ErrorContext) -> Vec<&ErrorRecord> {
        if filter == ErrorContext::ALL {
            self.errors.iter().collect()
        } else {
            self.errors
                .iter()
                .filter(|r| r.context.intersects(filter))
                .collect()
        }
    }

    /// Counts stored errors matching the filter.
    ///
    /// O(1) for [`ErrorContext::ALL`], O(n) otherwise.
    pub fn num_errors(&self, filter: ErrorContext) -> usize {
        if filter == ErrorContext::ALL {
            self.errors.len()
        } else {
            self.errors
                .iter()
                .filter(|r| r.context.intersects(filter))
                .count()
        }
    }

    /// True iff no errors are stored.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Clears all stored errors and the cumulative mask.
    ///
    /// A reset collector is indistinguishable from a freshly constructed
    /// one, so a single instance can be reused across independent runs.
    pub fn reset(&mut self) {
        self.errors.clear();
        self.error_mask = ErrorContext::NONE;
    }

    /// Returns the bitwise OR of every stored record's context.
    pub fn error_mask(&self) -> ErrorContext {
        self.error_mask
    }

    /// Consumes the collector into a validation result.
    ///
    /// Success when nothing was recorded; failure carrying the non-empty
    /// aggregate otherwise.
    pub fn into_validation(self) -> Validation<(), CollectedErrors> {
        match CollectedErrors::from_vec(self.errors) {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(()),
        }
    }
}

/// Substitutes rendered arguments into `{}` placeholders, in order.
///
/// Surplus arguments are ignored; surplus placeholders are left verbatim.
fn interpolate<'a>(template: &str, args: impl Iterator<Item = &'a Value>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args;
    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(value) => out.push_str(&render_argument(value)),
            None => out.push_str("{}"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

/// Renders one interpolation argument.
///
/// Strings render as-is (unquoted), booleans as the words `true`/`false`,
/// numbers via their display form, and anything else (null, arrays,
/// objects) as its JSON serialization.
fn render_argument(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Upper-cases the first character of the interpolated message.
fn capitalize_first(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
