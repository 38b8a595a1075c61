//! Event definitions for the Building Management context.
//!
//! Event names carry the context prefix so foreign services know the origin
//! of each event; a broker can route on the prefix (one queue per context).

use buildingmgmt_catalog::catalog::EventCatalog;
use buildingmgmt_catalog::error::CatalogError;
use buildingmgmt_catalog::event_type::{Context, EventTypeId};
use buildingmgmt_catalog::payload::PayloadSchema;

use crate::payload;
use crate::schema;

/// The bounded-context namespace for every event of this service.
pub const CONTEXT: Context = Context::new("BuildingMgmt");

/// Unqualified name of the building-added event.
pub const BUILDING_ADDED: &str = "BuildingAdded";

/// Unqualified name of the user-checked-in event.
pub const USER_CHECKED_IN: &str = "UserCheckedIn";

/// Unqualified name of the double-check-in-detected event.
pub const DOUBLE_CHECK_IN_DETECTED: &str = "DoubleCheckInDetected";

/// Returns the namespaced id of the building-added event.
#[must_use]
pub fn building_added() -> EventTypeId {
    CONTEXT.event(BUILDING_ADDED)
}

/// Returns the namespaced id of the user-checked-in event.
#[must_use]
pub fn user_checked_in() -> EventTypeId {
    CONTEXT.event(USER_CHECKED_IN)
}

/// Returns the namespaced id of the double-check-in-detected event.
#[must_use]
pub fn double_check_in_detected() -> EventTypeId {
    CONTEXT.event(DOUBLE_CHECK_IN_DETECTED)
}

/// Registers every event of this context with its payload schema.
///
/// The catalog handle is injected by the host's startup step; a failure
/// here must abort startup rather than leave a partially described context.
///
/// # Errors
///
/// Returns `CatalogError` if an event is already registered or a payload
/// schema cannot be built from the shared vocabulary.
pub fn describe(catalog: &mut EventCatalog) -> Result<(), CatalogError> {
    let vocabulary = schema::vocabulary()?;

    catalog.register(
        building_added(),
        PayloadSchema::new()
            .field(payload::BUILDING_ID, vocabulary.resolve(schema::BUILDING_ID)?)?
            .field(payload::NAME, vocabulary.resolve(schema::BUILDING_NAME)?)?,
    )?;

    catalog.register(
        user_checked_in(),
        PayloadSchema::new()
            .field(payload::BUILDING_ID, vocabulary.resolve(schema::BUILDING_ID)?)?
            .field(payload::NAME, vocabulary.resolve(schema::USERNAME)?)?,
    )?;

    catalog.register(
        double_check_in_detected(),
        PayloadSchema::new()
            .field(payload::BUILDING_ID, vocabulary.resolve(schema::BUILDING_ID)?)?
            .field(payload::NAME, vocabulary.resolve(schema::USERNAME)?)?,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{building_added, double_check_in_detected, user_checked_in};

    #[test]
    fn test_event_ids_carry_the_context_prefix() {
        assert_eq!(building_added().as_str(), "BuildingMgmt.BuildingAdded");
        assert_eq!(user_checked_in().as_str(), "BuildingMgmt.UserCheckedIn");
        assert_eq!(
            double_check_in_detected().as_str(),
            "BuildingMgmt.DoubleCheckInDetected"
        );
    }
}
