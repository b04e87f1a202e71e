//! Collector configuration.
//!
//! This module provides the [`ConfigProvider`] trait the collector consults
//! on every recorded error, and [`CollectorConfig`], the standard provider.
//! The collector requires a provider at construction; the composing layer
//! decides the mode and owns the instance.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::context::ErrorContext;

/// Configuration the error collector consults when recording an error.
///
/// The trait abstracts two decisions made by the driving validator:
/// whether the first violation aborts validation (exception mode) and
/// which context bit to stamp on newly recorded errors.
pub trait ConfigProvider: Send + Sync {
    /// True when the first violation should abort instead of accumulate.
    fn exception_mode_enabled(&self) -> bool;

    /// The context bit stamped on errors recorded right now.
    fn current_error_context(&self) -> ErrorContext;
}

/// The standard [`ConfigProvider`].
///
/// Exception mode is fixed at construction; the active error context can be
/// switched at runtime so the driving validator can move between phases
/// (e.g. schema validation before document validation) while sharing one
/// provider.
///
/// # Example
///
/// ```rust
/// use faultline::{CollectorConfig, ConfigProvider, ErrorContext};
///
/// let config = CollectorConfig::new().with_exception_mode(true);
/// assert!(config.exception_mode_enabled());
///
/// config.set_error_context(ErrorContext::SCHEMA_VALIDATION);
/// assert_eq!(config.current_error_context(), ErrorContext::SCHEMA_VALIDATION);
/// ```
pub struct CollectorConfig {
    exception_mode: bool,
    context: RwLock<ErrorContext>,
}

impl CollectorConfig {
    /// Creates a config in accumulate mode with the document-validation context.
    pub fn new() -> Self {
        Self {
            exception_mode: false,
            context: RwLock::new(ErrorContext::DOCUMENT_VALIDATION),
        }
    }

    /// Sets whether the first violation aborts validation.
    pub fn with_exception_mode(mut self, enabled: bool) -> Self {
        self.exception_mode = enabled;
        self
    }

    /// Sets the starting error context.
    pub fn with_error_context(self, context: ErrorContext) -> Self {
        *self.context.write() = context;
        self
    }

    /// Switches the context stamped on subsequently recorded errors.
    pub fn set_error_context(&self, context: ErrorContext) {
        *self.context.write() = context;
    }

    /// Wraps this config for sharing with a collector.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for CollectorConfig {
    fn exception_mode_enabled(&self) -> bool {
        self.exception_mode
    }

    fn current_error_context(&self) -> ErrorContext {
        *self.context.read()
    }
}
