//! Error types for validation failures.
//!
//! This module provides the record types for accumulated validation errors
//! and the fast-fail error raised in exception mode.

mod failure;
mod record;

pub use failure::ValidationFailure;
pub use record::{CollectedErrors, ErrorRecord};
