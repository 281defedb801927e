//! Tests to verify backend JSON fixtures parse correctly

use mockdeck_core::{StubMapping, UserRecord};

#[test]
fn test_users_fixture_parses() {
    let json = include_str!("fixtures/users.json");
    let users: Vec<UserRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(users.len(), 3);

    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].name, "Alice Johnson");
    assert_eq!(users[0].birthday, "1990-05-01");
    assert_eq!(users[0].createts, "2024-01-15T10:23:00Z");

    // createts is server-assigned and may be absent
    assert_eq!(users[2].createts, "");
}

#[test]
fn test_mappings_envelope_fixture_parses() {
    let json = include_str!("fixtures/mappings_envelope.json");
    let body: serde_json::Value = serde_json::from_str(json).unwrap();

    let mappings = body["mappings"].as_array().unwrap();
    assert_eq!(mappings.len(), 2);

    let first = StubMapping::new(mappings[0].clone());
    assert_eq!(first.id(), Some("d68fb4e2-48ed-40d2-bc73-0a18f54f3ece"));
    assert_eq!(first.method(), "GET");
    assert_eq!(first.url(), Some("/api/v1/users"));
    assert_eq!(first.response_status(), Some(200));

    // urlPattern is the fallback when urlPath/url are absent
    let second = StubMapping::new(mappings[1].clone());
    assert_eq!(second.method(), "POST");
    assert_eq!(second.url(), Some("/api/v1/users/.*"));
    assert_eq!(second.response_status(), Some(201));
}

#[test]
fn test_mapping_round_trip_preserves_unknown_fields() {
    let json = include_str!("fixtures/mappings_envelope.json");
    let body: serde_json::Value = serde_json::from_str(json).unwrap();
    let doc = body["mappings"][1].clone();

    let stub = StubMapping::new(doc.clone());
    let serialized = serde_json::to_value(&stub).unwrap();

    // bodyPatterns and metadata are not modeled but must survive untouched
    assert_eq!(serialized, doc);
    assert_eq!(serialized["metadata"]["owner"], "console");
}

#[test]
fn test_pretty_output_is_reparseable() {
    let json = include_str!("fixtures/mappings_envelope.json");
    let body: serde_json::Value = serde_json::from_str(json).unwrap();
    let stub = StubMapping::new(body["mappings"][0].clone());

    let reparsed: serde_json::Value = serde_json::from_str(&stub.pretty()).unwrap();
    assert_eq!(reparsed["request"]["urlPath"], "/api/v1/users");
}
