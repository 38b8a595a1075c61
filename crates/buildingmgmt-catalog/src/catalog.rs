//! The event catalog.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::CatalogError;
use crate::event_type::EventTypeId;
use crate::payload::PayloadSchema;

/// One registered event: an identifier paired with its payload schema.
#[derive(Debug, Clone)]
pub struct EventDefinition {
    /// The namespaced event-type identifier.
    pub event_type: EventTypeId,
    /// The required payload shape.
    pub payload: PayloadSchema,
}

/// Single source of truth mapping event-type identifiers to payload schemas.
///
/// A catalog is populated once, single-threaded, during process
/// initialization and is read-only afterwards; it can then be shared freely
/// across concurrent readers. Reloading schemas means building a fresh
/// catalog and swapping the handle, never mutating one in place.
#[derive(Debug, Default)]
pub struct EventCatalog {
    definitions: Vec<EventDefinition>,
    index: HashMap<EventTypeId, usize>,
}

impl EventCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one event definition.
    ///
    /// Registration is atomic: on failure the catalog is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateEvent` if `event_type` is already
    /// registered.
    pub fn register(
        &mut self,
        event_type: EventTypeId,
        payload: PayloadSchema,
    ) -> Result<(), CatalogError> {
        if self.index.contains_key(event_type.as_str()) {
            return Err(CatalogError::DuplicateEvent(event_type));
        }
        debug!(event_type = %event_type, fields = payload.len(), "registered event");
        self.index.insert(event_type.clone(), self.definitions.len());
        self.definitions.push(EventDefinition {
            event_type,
            payload,
        });
        Ok(())
    }

    /// Returns the payload schema registered for an event type.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownEvent` if `event_type` was never
    /// registered.
    pub fn lookup(&self, event_type: &str) -> Result<&PayloadSchema, CatalogError> {
        self.index
            .get(event_type)
            .map(|&position| &self.definitions[position].payload)
            .ok_or_else(|| CatalogError::UnknownEvent(EventTypeId::from(event_type)))
    }

    /// Returns every definition in registration order.
    pub fn describe_all(&self) -> impl Iterator<Item = &EventDefinition> {
        self.definitions.iter()
    }

    /// Returns the number of registered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if no events are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Produces the full catalog as one JSON document mapping each
    /// event-type identifier to its payload schema, in registration order.
    ///
    /// Used for schema export and documentation; the output is deterministic
    /// for a given registration sequence.
    #[must_use]
    pub fn to_json_schema(&self) -> Value {
        let mut document = Map::new();
        for definition in &self.definitions {
            document.insert(
                definition.event_type.as_str().to_owned(),
                definition.payload.to_json_schema(),
            );
        }
        Value::Object(document)
    }
}
