//! Shared field-schema vocabulary.

use std::collections::HashMap;

use crate::error::SchemaError;
use crate::field::FieldSchema;

/// Named registry of reusable field rules.
///
/// Every payload schema in a bounded context resolves its fields through one
/// vocabulary, so a given definition name always carries one validation
/// meaning across all events that use it.
#[derive(Debug, Default)]
pub struct FieldVocabulary {
    definitions: HashMap<String, FieldSchema>,
}

impl FieldVocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named field rule.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateField` if `name` is already defined,
    /// or the rule's own validation error if it is malformed.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        schema: FieldSchema,
    ) -> Result<(), SchemaError> {
        schema.validate()?;
        let name = name.into();
        if self.definitions.contains_key(&name) {
            return Err(SchemaError::DuplicateField(name));
        }
        self.definitions.insert(name, schema);
        Ok(())
    }

    /// Resolves a field rule by its definition name.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::UnknownField` if no rule was defined under
    /// `name`.
    pub fn resolve(&self, name: &str) -> Result<FieldSchema, SchemaError> {
        self.definitions
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaError::UnknownField(name.to_owned()))
    }

    /// Returns the number of defined field rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if no field rules are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
