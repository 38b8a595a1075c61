//! Catalog error types.

use thiserror::Error;

use crate::event_type::EventTypeId;

/// Errors raised while building field or payload schemas.
///
/// All of these indicate a broken definition, not a transient condition:
/// the registration step that hit one must abort startup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A referenced field definition does not exist in the vocabulary.
    #[error("unknown field definition: {0}")]
    UnknownField(String),

    /// A field name appears twice within one payload schema or vocabulary.
    #[error("duplicate field: {0}")]
    DuplicateField(String),

    /// A pattern constraint is empty.
    #[error("empty pattern constraint on field rule")]
    EmptyPattern,

    /// A string length constraint has its minimum above its maximum.
    #[error("invalid length bounds: minLength {min} exceeds maxLength {max}")]
    InvalidLengthBounds {
        /// The minimum length requested.
        min: u64,
        /// The maximum length requested.
        max: u64,
    },

    /// A numeric range constraint has its minimum above its maximum.
    #[error("invalid numeric bounds: minimum {min} exceeds maximum {max}")]
    InvalidNumericBounds {
        /// The lower bound requested.
        min: i64,
        /// The upper bound requested.
        max: i64,
    },
}

/// Top-level catalog error type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// An event type was registered twice.
    #[error("event type already registered: {0}")]
    DuplicateEvent(EventTypeId),

    /// Lookup of an event type that was never registered.
    #[error("unknown event type: {0}")]
    UnknownEvent(EventTypeId),

    /// A payload schema could not be built.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
