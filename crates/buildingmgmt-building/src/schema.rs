//! Reusable field-schema definitions for this context.
//!
//! Each definition keeps its own name even when two of them bind to the same
//! payload property: `building_name` and `username` both end up under the
//! `name` field, but they are distinct rules and may diverge independently.

use buildingmgmt_catalog::error::SchemaError;
use buildingmgmt_catalog::field::FieldSchema;
use buildingmgmt_catalog::vocabulary::FieldVocabulary;

/// Vocabulary name of the building-identifier rule.
pub const BUILDING_ID: &str = "buildingId";

/// Vocabulary name of the building-name rule.
pub const BUILDING_NAME: &str = "buildingName";

/// Vocabulary name of the username rule.
pub const USERNAME: &str = "username";

/// A building identifier: a UUID string.
#[must_use]
pub fn building_id() -> FieldSchema {
    FieldSchema::uuid()
}

/// A building's display name: non-empty, capped for projection columns.
#[must_use]
pub fn building_name() -> FieldSchema {
    FieldSchema::string().min_length(1).max_length(120)
}

/// A username checking in or out of a building.
#[must_use]
pub fn username() -> FieldSchema {
    FieldSchema::string().min_length(1).max_length(60)
}

/// Builds the shared vocabulary for this context.
///
/// # Errors
///
/// Returns `SchemaError` if a definition is malformed or a name is defined
/// twice; either aborts the registration step.
pub fn vocabulary() -> Result<FieldVocabulary, SchemaError> {
    let mut vocabulary = FieldVocabulary::new();
    vocabulary.define(BUILDING_ID, building_id())?;
    vocabulary.define(BUILDING_NAME, building_name())?;
    vocabulary.define(USERNAME, username())?;
    Ok(vocabulary)
}
