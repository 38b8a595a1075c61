//! Reusable field-level validation rules.
//!
//! A `FieldSchema` describes the required shape of one payload field as a
//! JSON-Schema-compatible fragment. Bounded contexts build a shared
//! vocabulary of these so the same field name never acquires two different
//! validation meanings across events.

use serde_json::{Map, Value, json};

use crate::error::SchemaError;

/// The base JSON type of a field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    String,
    Uuid,
    Integer,
    Boolean,
}

/// A reusable validation rule for one payload field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    kind: FieldKind,
    min_length: Option<u64>,
    max_length: Option<u64>,
    pattern: Option<String>,
    minimum: Option<i64>,
    maximum: Option<i64>,
}

impl FieldSchema {
    const fn of_kind(kind: FieldKind) -> Self {
        Self {
            kind,
            min_length: None,
            max_length: None,
            pattern: None,
            minimum: None,
            maximum: None,
        }
    }

    /// An unconstrained string rule.
    #[must_use]
    pub const fn string() -> Self {
        Self::of_kind(FieldKind::String)
    }

    /// A UUID-formatted string rule.
    #[must_use]
    pub const fn uuid() -> Self {
        Self::of_kind(FieldKind::Uuid)
    }

    /// An unconstrained integer rule.
    #[must_use]
    pub const fn integer() -> Self {
        Self::of_kind(FieldKind::Integer)
    }

    /// A boolean rule.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::of_kind(FieldKind::Boolean)
    }

    /// Constrains a string rule to a minimum length.
    #[must_use]
    pub const fn min_length(mut self, min: u64) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Constrains a string rule to a maximum length.
    #[must_use]
    pub const fn max_length(mut self, max: u64) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Constrains a string rule with a regular-expression pattern.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Constrains an integer rule to a lower bound.
    #[must_use]
    pub const fn minimum(mut self, min: i64) -> Self {
        self.minimum = Some(min);
        self
    }

    /// Constrains an integer rule to an upper bound.
    #[must_use]
    pub const fn maximum(mut self, max: i64) -> Self {
        self.maximum = Some(max);
        self
    }

    /// Checks that the rule is well formed.
    ///
    /// Runs when the rule is added to a payload schema or defined in a
    /// vocabulary, so a malformed definition fails the registration step
    /// instead of surfacing as a broken exported schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if a pattern is empty or a min/max pair is
    /// inverted.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if let Some(pattern) = &self.pattern
            && pattern.is_empty()
        {
            return Err(SchemaError::EmptyPattern);
        }
        if let (Some(min), Some(max)) = (self.min_length, self.max_length)
            && min > max
        {
            return Err(SchemaError::InvalidLengthBounds { min, max });
        }
        if let (Some(min), Some(max)) = (self.minimum, self.maximum)
            && min > max
        {
            return Err(SchemaError::InvalidNumericBounds { min, max });
        }
        Ok(())
    }

    /// Produces the JSON Schema fragment for this rule.
    ///
    /// Length and pattern constraints only emit on string rules; numeric
    /// bounds only emit on integer rules.
    #[must_use]
    pub fn to_json_schema(&self) -> Value {
        match self.kind {
            FieldKind::String => {
                let mut schema = Map::new();
                schema.insert("type".to_owned(), json!("string"));
                if let Some(min) = self.min_length {
                    schema.insert("minLength".to_owned(), json!(min));
                }
                if let Some(max) = self.max_length {
                    schema.insert("maxLength".to_owned(), json!(max));
                }
                if let Some(pattern) = &self.pattern {
                    schema.insert("pattern".to_owned(), json!(pattern));
                }
                Value::Object(schema)
            }
            FieldKind::Uuid => json!({ "type": "string", "format": "uuid" }),
            FieldKind::Integer => {
                let mut schema = Map::new();
                schema.insert("type".to_owned(), json!("integer"));
                if let Some(min) = self.minimum {
                    schema.insert("minimum".to_owned(), json!(min));
                }
                if let Some(max) = self.maximum {
                    schema.insert("maximum".to_owned(), json!(max));
                }
                Value::Object(schema)
            }
            FieldKind::Boolean => json!({ "type": "boolean" }),
        }
    }
}
