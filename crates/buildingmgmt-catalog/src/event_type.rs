//! Event-type identifiers.
//!
//! Events tell other services what happened in this one, so every event name
//! carries its bounded-context prefix (`BuildingMgmt.BuildingAdded`). A
//! broker can then route events of one context to a dedicated queue by
//! matching on the prefix.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between a context prefix and an event name.
pub const CONTEXT_SEPARATOR: char = '.';

/// Bounded-service namespace prefix used to disambiguate events across
/// services.
///
/// The name must be non-empty and must not contain the `.` separator;
/// contexts are declared as constants by each bounded context crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context(&'static str);

impl Context {
    /// Creates a context from its name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the context name without separator.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }

    /// Builds the namespaced identifier for an event in this context.
    #[must_use]
    pub fn event(self, event_name: &str) -> EventTypeId {
        EventTypeId(format!("{}{CONTEXT_SEPARATOR}{event_name}", self.0))
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Namespaced event-type identifier, `<Context>.<EventName>`.
///
/// Globally unique within a deployment and stable across versions; renaming
/// an identifier breaks every downstream consumer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventTypeId(String);

impl EventTypeId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the context portion of the identifier, if it has one.
    #[must_use]
    pub fn context_name(&self) -> Option<&str> {
        self.0.split_once(CONTEXT_SEPARATOR).map(|(ctx, _)| ctx)
    }
}

impl fmt::Display for EventTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for EventTypeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventTypeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for EventTypeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Context, EventTypeId};

    #[test]
    fn test_context_event_prepends_namespace() {
        let context = Context::new("BuildingMgmt");

        let id = context.event("BuildingAdded");

        assert_eq!(id.as_str(), "BuildingMgmt.BuildingAdded");
        assert_eq!(id.context_name(), Some("BuildingMgmt"));
    }

    #[test]
    fn test_event_type_id_serializes_as_plain_string() {
        let id = EventTypeId::from("BuildingMgmt.UserCheckedIn");

        let json = serde_json::to_value(&id).unwrap();

        assert_eq!(json, serde_json::json!("BuildingMgmt.UserCheckedIn"));
    }

    #[test]
    fn test_context_name_absent_without_separator() {
        let id = EventTypeId::from("UserCheckedIn");

        assert_eq!(id.context_name(), None);
    }
}
