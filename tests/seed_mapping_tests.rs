//! Seed remapping tests
//!
//! These tests validate the flat field remap from the random-user generator's
//! wire shape to the stored document, including the fields the remap drops.

use roster_server::models::{Postcode, UserSummary};
use roster_server::seeding::RandomUser;

/// A single generator result, trimmed from a real randomuser.me response.
/// Carries the extra blocks (dob, registered, cell, id, coordinates,
/// timezone) the remap must drop.
fn generator_payload() -> serde_json::Value {
    serde_json::json!({
        "gender": "male",
        "name": {"title": "Mr", "first": "Theo", "last": "Roussel"},
        "location": {
            "street": {"number": 8929, "name": "Rue de la Mairie"},
            "city": "Nantes",
            "state": "Creuse",
            "country": "France",
            "postcode": 44300,
            "coordinates": {"latitude": "-81.5762", "longitude": "-10.1514"},
            "timezone": {"offset": "+1:00", "description": "Brussels, Copenhagen, Madrid, Paris"}
        },
        "email": "theo.roussel@example.com",
        "login": {
            "uuid": "155dcbd5-3d9d-4e40-a9e9-3bc4c3e6ee21",
            "username": "smallswan717",
            "password": "chocolate",
            "salt": "dP1Cr4nW",
            "md5": "0a9bd28be7a60c7eca4b9c0a3f1b0a04",
            "sha1": "d4c1b6f8e3f6f5b0b4f8f1a3c9d8e7f6a5b4c3d2",
            "sha256": "ab54d9c4e2b2f1d5a6c7b8e9f0a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6e7f8a9"
        },
        "dob": {"date": "1963-06-12T09:31:58.273Z", "age": 62},
        "registered": {"date": "2010-01-26T11:40:18.266Z", "age": 15},
        "phone": "02-60-16-49-46",
        "cell": "06-04-20-99-79",
        "id": {"name": "INSEE", "value": "1630585268518 55"},
        "picture": {
            "large": "https://randomuser.me/api/portraits/men/62.jpg",
            "medium": "https://randomuser.me/api/portraits/med/men/62.jpg",
            "thumbnail": "https://randomuser.me/api/portraits/thumb/men/62.jpg"
        },
        "nat": "FR"
    })
}

// ============================================================================
// Deserialization
// ============================================================================

#[test]
fn test_generator_payload_deserializes() {
    let user: RandomUser = serde_json::from_value(generator_payload()).unwrap();
    assert_eq!(user.email, "theo.roussel@example.com");
    assert_eq!(user.login.username, "smallswan717");
    assert_eq!(user.login.password, "chocolate");
    assert_eq!(user.location.postcode, Postcode::Number(44300));
}

#[test]
fn test_string_postcode_deserializes() {
    let mut payload = generator_payload();
    payload["location"]["postcode"] = serde_json::json!("EC1A 1BB");

    let user: RandomUser = serde_json::from_value(payload).unwrap();
    assert_eq!(
        user.location.postcode,
        Postcode::Text("EC1A 1BB".to_string())
    );
}

// ============================================================================
// Remapping
// ============================================================================

#[test]
fn test_remap_swaps_password_for_hash() {
    let user: RandomUser = serde_json::from_value(generator_payload()).unwrap();
    let record = user.into_record("$2b$10$seedhash".to_string());

    assert_eq!(record.login.hash, "$2b$10$seedhash");
    assert_eq!(record.login.uuid, "155dcbd5-3d9d-4e40-a9e9-3bc4c3e6ee21");

    let json = serde_json::to_value(&record).unwrap();
    assert!(json["login"].get("password").is_none());
    assert!(json["login"].get("md5").is_none());
}

#[test]
fn test_remap_drops_generator_extras() {
    let user: RandomUser = serde_json::from_value(generator_payload()).unwrap();
    let record = user.into_record("$2b$10$seedhash".to_string());

    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("dob").is_none());
    assert!(json.get("registered").is_none());
    assert!(json.get("cell").is_none());
    assert!(json.get("id").is_none());
    assert!(json["location"].get("coordinates").is_none());
    assert!(json["location"].get("timezone").is_none());
}

#[test]
fn test_remap_keeps_stored_fields() {
    let user: RandomUser = serde_json::from_value(generator_payload()).unwrap();
    let record = user.into_record("$2b$10$seedhash".to_string());

    assert_eq!(record.gender, "male");
    assert_eq!(record.name.first, "Theo");
    assert_eq!(record.location.street.number, 8929);
    assert_eq!(record.location.city, "Nantes");
    assert_eq!(record.phone, "02-60-16-49-46");
    assert_eq!(record.nat, "FR");
    assert!(record.picture.is_some());
}

// ============================================================================
// Listing projection over seeded records
// ============================================================================

#[test]
fn test_summary_projection_over_seeded_record() {
    let user: RandomUser = serde_json::from_value(generator_payload()).unwrap();
    let record = user.into_record("$2b$10$seedhash".to_string());

    let summary = UserSummary::from(&record);
    assert_eq!(summary.id, "155dcbd5-3d9d-4e40-a9e9-3bc4c3e6ee21");
    assert_eq!(summary.username, "smallswan717");
}
