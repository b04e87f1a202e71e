//! Constraint identities and message templates.
//!
//! This module provides the [`ConstraintDescriptor`] trait that identifies a
//! failed validation rule, and [`ConstraintError`], the catalogue of standard
//! JSON-Schema constraint identities with their message templates.

/// Identifies a failed validation rule to the error collector.
///
/// A descriptor supplies two things: a stable identifier naming the rule
/// (e.g. `minLength`) and a message template whose `{}` placeholders are
/// substituted positionally from the extra parameters passed alongside the
/// error.
///
/// [`ConstraintError`] is the standard implementation; validators with
/// bespoke rules can implement the trait directly.
pub trait ConstraintDescriptor {
    /// The message template with positional `{}` placeholders.
    fn message_template(&self) -> &str;

    /// The stable identifier of the rule that failed.
    fn identifier_value(&self) -> &str;
}

/// The standard catalogue of JSON-Schema constraint identities.
///
/// Each variant carries the keyword identifier recorded on error records and
/// a message template consumed by the collector.
///
/// # Example
///
/// ```rust
/// use faultline::{ConstraintDescriptor, ConstraintError};
///
/// assert_eq!(ConstraintError::MinLength.identifier_value(), "minLength");
/// assert_eq!(
///     ConstraintError::MinLength.message_template(),
///     "must be at least {} characters long"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConstraintError {
    AdditionalItems,
    AdditionalProperties,
    AllOf,
    AnyOf,
    Constant,
    Dependencies,
    Enum,
    ExclusiveMaximum,
    ExclusiveMinimum,
    Format,
    Maximum,
    MaxItems,
    MaxLength,
    MaxProperties,
    Minimum,
    MinItems,
    MinLength,
    MinProperties,
    MultipleOf,
    Not,
    OneOf,
    Pattern,
    Required,
    Type,
    UniqueItems,
}

impl ConstraintDescriptor for ConstraintError {
    fn message_template(&self) -> &str {
        match self {
            ConstraintError::AdditionalItems => {
                "the item {} is not defined and the definition does not allow additional items"
            }
            ConstraintError::AdditionalProperties => {
                "the property {} is not defined and the definition does not allow additional properties"
            }
            ConstraintError::AllOf => "failed to match all schemas",
            ConstraintError::AnyOf => "failed to match at least one schema",
            ConstraintError::Constant => "does not have a value equal to {}",
            ConstraintError::Dependencies => "{} depends on {}, which is missing",
            ConstraintError::Enum => "does not have a value in the enumeration {}",
            ConstraintError::ExclusiveMaximum => "must have a value strictly lower than {}",
            ConstraintError::ExclusiveMinimum => "must have a value strictly greater than {}",
            ConstraintError::Format => "invalid {} format: {}",
            ConstraintError::Maximum => "must have a maximum value less than or equal to {}",
            ConstraintError::MaxItems => "there must be a maximum of {} items in the array",
            ConstraintError::MaxLength => "must be at most {} characters long",
            ConstraintError::MaxProperties => "must contain no more than {} properties",
            ConstraintError::Minimum => "must have a minimum value greater than or equal to {}",
            ConstraintError::MinItems => "there must be a minimum of {} items in the array",
            ConstraintError::MinLength => "must be at least {} characters long",
            ConstraintError::MinProperties => "must contain a minimum of {} properties",
            ConstraintError::MultipleOf => "must be a multiple of {}",
            ConstraintError::Not => "matched a schema which it must not match",
            ConstraintError::OneOf => "failed to match exactly one schema",
            ConstraintError::Pattern => "does not match the regex pattern {}",
            ConstraintError::Required => "the property {} is required",
            ConstraintError::Type => "{} value found, but {} is required",
            ConstraintError::UniqueItems => "there are no duplicates allowed in the array",
        }
    }

    fn identifier_value(&self) -> &str {
        match self {
            ConstraintError::AdditionalItems => "additionalItems",
            ConstraintError::AdditionalProperties => "additionalProperties",
            ConstraintError::AllOf => "allOf",
            ConstraintError::AnyOf => "anyOf",
            ConstraintError::Constant => "const",
            ConstraintError::Dependencies => "dependencies",
            ConstraintError::Enum => "enum",
            ConstraintError::ExclusiveMaximum => "exclusiveMaximum",
            ConstraintError::ExclusiveMinimum => "exclusiveMinimum",
            ConstraintError::Format => "format",
            ConstraintError::Maximum => "maximum",
            ConstraintError::MaxItems => "maxItems",
            ConstraintError::MaxLength => "maxLength",
            ConstraintError::MaxProperties => "maxProperties",
            ConstraintError::Minimum => "minimum",
            ConstraintError::MinItems => "minItems",
            ConstraintError::MinLength => "minLength",
            ConstraintError::MinProperties => "minProperties",
            ConstraintError::MultipleOf => "multipleOf",
            ConstraintError::Not => "not",
            ConstraintError::OneOf => "oneOf",
            ConstraintError::Pattern => "pattern",
            ConstraintError::Required => "required",
            ConstraintError::Type => "type",
            ConstraintError::UniqueItems => "uniqueItems",
        }
    }
}
