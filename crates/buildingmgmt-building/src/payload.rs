//! Shared payload field names.
//!
//! Payload property names are constants so commands, events, and queries all
//! spell them identically.

/// Identifier of a building.
pub const BUILDING_ID: &str = "buildingId";

/// Display name; carries a building name or a username depending on the
/// event.
pub const NAME: &str = "name";
