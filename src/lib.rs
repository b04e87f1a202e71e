//! # Faultline
//!
//! The error-collection and reporting core of a schema-validation engine.
//!
//! ## Overview
//!
//! Constraint checks don't decide what happens to a violation; they report
//! it to an [`ErrorCollector`], which derives the location paths, formats
//! the message, stamps the active error context, and either accumulates the
//! record or fails fast depending on configuration. After validation the
//! caller queries the collector for pass/fail and diagnostics, optionally
//! filtered by context via a bitmask.
//!
//! ## Core Types
//!
//! - [`Pointer`]: location of a value inside a validated document, rendered
//!   as `#/users/0/email` or the human-readable `users[0].email`
//! - [`ErrorRecord`]: one recorded validation failure with full context
//! - [`CollectedErrors`]: non-empty aggregate of records for failure results
//! - [`ErrorCollector`]: the per-session accumulation point
//! - [`ErrorContext`]: bitmask classifying which phase produced an error
//! - [`ConstraintError`]: catalogue of standard constraint identities
//!
//! ## Example
//!
//! ```rust
//! use faultline::{CollectorConfig, ConstraintError, ErrorCollector, ErrorContext, Pointer};
//! use indexmap::IndexMap;
//! use serde_json::json;
//!
//! let mut collector = ErrorCollector::new(CollectorConfig::new().into_shared());
//!
//! let path = Pointer::root().push_property("age");
//! let mut params = IndexMap::new();
//! params.insert("min".to_string(), json!(0));
//!
//! collector
//!     .add_error(Some(&ConstraintError::Minimum), Some(&path), params)
//!     .unwrap();
//!
//! assert!(!collector.is_valid());
//! let errors = collector.get_errors(ErrorContext::ALL);
//! assert_eq!(errors[0].property, "age");
//! assert_eq!(
//!     errors[0].message,
//!     "Must have a minimum value greater than or equal to 0"
//! );
//! ```

pub mod collector;
pub mod config;
pub mod constraint;
pub mod context;
pub mod convert;
pub mod error;
pub mod pointer;

pub use collector::ErrorCollector;
pub use config::{CollectorConfig, ConfigProvider};
pub use constraint::{ConstraintDescriptor, ConstraintError};
pub use context::ErrorContext;
pub use convert::{json_pattern_to_regex, to_object_recursive, EncodingError};
pub use error::{CollectedErrors, ErrorRecord, ValidationFailure};
pub use pointer::{Pointer, PointerSegment};

/// Type alias for the result of a whole validation session.
pub type CollectionResult = stillwater::Validation<(), CollectedErrors>;
