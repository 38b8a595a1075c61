//! Integration tests for Building Management event registration.

use buildingmgmt_building::event;
use buildingmgmt_catalog::catalog::EventCatalog;
use buildingmgmt_catalog::error::CatalogError;
use serde_json::json;

#[test]
fn test_describe_registers_all_events_in_declaration_order() {
    // Arrange
    let mut catalog = EventCatalog::new();

    // Act
    event::describe(&mut catalog).unwrap();

    // Assert
    let ids: Vec<&str> = catalog
        .describe_all()
        .map(|definition| definition.event_type.as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "BuildingMgmt.BuildingAdded",
            "BuildingMgmt.UserCheckedIn",
            "BuildingMgmt.DoubleCheckInDetected",
        ]
    );
}

#[test]
fn test_building_added_payload_has_building_id_and_building_name() {
    // Arrange
    let mut catalog = EventCatalog::new();
    event::describe(&mut catalog).unwrap();

    // Act
    let payload = catalog.lookup("BuildingMgmt.BuildingAdded").unwrap();

    // Assert
    assert_eq!(
        payload.to_json_schema(),
        json!({
            "type": "object",
            "properties": {
                "buildingId": { "type": "string", "format": "uuid" },
                "name": { "type": "string", "minLength": 1, "maxLength": 120 },
            },
            "required": ["buildingId", "name"],
            "additionalProperties": false,
        })
    );
}

#[test]
fn test_check_in_events_share_the_username_payload_shape() {
    // Arrange
    let mut catalog = EventCatalog::new();
    event::describe(&mut catalog).unwrap();

    // Act
    let checked_in = catalog.lookup("BuildingMgmt.UserCheckedIn").unwrap();
    let double_check_in = catalog
        .lookup("BuildingMgmt.DoubleCheckInDetected")
        .unwrap();

    // Assert
    let expected = json!({
        "type": "object",
        "properties": {
            "buildingId": { "type": "string", "format": "uuid" },
            "name": { "type": "string", "minLength": 1, "maxLength": 60 },
        },
        "required": ["buildingId", "name"],
        "additionalProperties": false,
    });
    assert_eq!(checked_in.to_json_schema(), expected);
    assert_eq!(double_check_in.to_json_schema(), expected);
}

#[test]
fn test_describe_twice_fails_without_corrupting_the_catalog() {
    // Arrange
    let mut catalog = EventCatalog::new();
    event::describe(&mut catalog).unwrap();

    // Act
    let result = event::describe(&mut catalog);

    // Assert
    assert_eq!(
        result,
        Err(CatalogError::DuplicateEvent(event::building_added()))
    );
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_exported_document_covers_every_event() {
    // Arrange
    let mut catalog = EventCatalog::new();
    event::describe(&mut catalog).unwrap();

    // Act
    let document = catalog.to_json_schema();

    // Assert
    let exported = document.as_object().unwrap();
    assert_eq!(exported.len(), 3);
    let keys: Vec<&String> = exported.keys().collect();
    assert_eq!(
        keys,
        vec![
            "BuildingMgmt.BuildingAdded",
            "BuildingMgmt.UserCheckedIn",
            "BuildingMgmt.DoubleCheckInDetected",
        ]
    );
}
