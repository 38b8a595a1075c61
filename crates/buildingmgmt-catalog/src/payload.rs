//! Payload schemas.

use serde_json::{Map, Value, json};

use crate::error::SchemaError;
use crate::field::FieldSchema;

/// The required shape of an event's payload: an ordered mapping from field
/// name to field rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadSchema {
    fields: Vec<(String, FieldSchema)>,
}

impl PayloadSchema {
    /// Creates an empty payload schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the payload, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateField` if `name` is already present in
    /// this schema, or the rule's own validation error if it is malformed.
    pub fn field(
        mut self,
        name: impl Into<String>,
        schema: FieldSchema,
    ) -> Result<Self, SchemaError> {
        schema.validate()?;
        let name = name.into();
        if self.fields.iter().any(|(existing, _)| *existing == name) {
            return Err(SchemaError::DuplicateField(name));
        }
        self.fields.push((name, schema));
        Ok(self)
    }

    /// Returns the rule for a field, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, schema)| schema)
    }

    /// Returns the field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the payload has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Produces the JSON Schema object for this payload.
    ///
    /// Every field is required and no additional properties are allowed, as
    /// the validating framework expects closed payload objects.
    #[must_use]
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for (name, schema) in &self.fields {
            properties.insert(name.clone(), schema.to_json_schema());
        }
        let required: Vec<&str> = self.field_names().collect();
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }
}
