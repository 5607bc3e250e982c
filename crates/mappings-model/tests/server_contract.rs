// SPDX-License-Identifier: Apache-2.0

use mappings_model::{parse_server_id, Color, ServerId, ServerRecord};

#[test]
fn server_id_parsing_is_strict() {
    assert!(ServerId::parse("hypixel").is_ok());
    assert!(ServerId::parse("2b2t").is_ok());
    assert!(ServerId::parse("").is_err());
    assert!(ServerId::parse("Hypixel").is_err());
    assert!(ServerId::parse("hy-pixel").is_err());
    assert_eq!(
        parse_server_id("mineplex").expect("id").as_str(),
        "mineplex"
    );
}

#[test]
fn server_id_rejects_hidden_trimming() {
    assert!(ServerId::parse(" hypixel").is_err());
    assert!(ServerId::parse("hypixel ").is_err());
}

#[test]
fn color_requires_uppercase_hex() {
    assert!(Color::parse("#FFAA00").is_ok());
    assert!(Color::parse("#ffaa00").is_err());
    assert!(Color::parse("FFAA00").is_err());
    assert!(Color::parse("#FFAA0").is_err());
    assert!(Color::parse("#GGAA00").is_err());
}

#[test]
fn metadata_deserializes_from_camel_case_and_tolerates_unknown_fields() {
    let raw = r##"{
        "id": "hypixel",
        "name": "Hypixel",
        "primaryAddress": "mc.hypixel.net",
        "addresses": ["mc.hypixel.net", "hypixel.net"],
        "primaryMinecraftVersion": "1.8.9",
        "minecraftVersions": ["1.8.*", "1.19.*"],
        "primaryColor": "#FFAA00",
        "socials": {"twitter": "hypixel"},
        "someFutureField": true
    }"##;
    let record: ServerRecord = serde_json::from_str(raw).expect("deserialize metadata");
    assert_eq!(record.id.as_str(), "hypixel");
    assert_eq!(record.primary_address.as_deref(), Some("mc.hypixel.net"));
    assert!(!record.inactive);
    assert!(!record.enriched);
    record.validate().expect("record is coherent");
}

#[test]
fn deserialization_enforces_id_rules() {
    let raw = r#"{"id": "Bad Server!", "name": "Bad"}"#;
    let err = serde_json::from_str::<ServerRecord>(raw).expect_err("invalid id must not load");
    assert!(err.to_string().contains("[a-z0-9]+"), "got {err}");
}

#[test]
fn deserialization_enforces_color_rules() {
    let raw = r##"{"id": "bad", "name": "Bad", "primaryColor": "#zzzzzz"}"##;
    assert!(serde_json::from_str::<ServerRecord>(raw).is_err());
}

#[test]
fn validate_rejects_unlisted_primary_address() {
    let raw = r#"{
        "id": "hypixel",
        "name": "Hypixel",
        "primaryAddress": "mc.hypixel.net",
        "addresses": ["play.hypixel.net"]
    }"#;
    let record: ServerRecord = serde_json::from_str(raw).expect("deserialize metadata");
    let err = record.validate().expect_err("primary address not listed");
    assert!(err.to_string().contains("primaryAddress"));
}

#[test]
fn validate_rejects_unlisted_primary_version() {
    let raw = r#"{
        "id": "hypixel",
        "name": "Hypixel",
        "primaryMinecraftVersion": "1.8.9",
        "minecraftVersions": ["1.19"]
    }"#;
    let record: ServerRecord = serde_json::from_str(raw).expect("deserialize metadata");
    assert!(record.validate().is_err());
}

#[test]
fn derived_flags_round_trip_in_serialization() {
    let raw = r#"{"id": "hypixel", "name": "Hypixel"}"#;
    let mut record: ServerRecord = serde_json::from_str(raw).expect("deserialize metadata");
    record.inactive = true;
    record.enriched = true;
    let out = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(out["inactive"], serde_json::json!(true));
    assert_eq!(out["enriched"], serde_json::json!(true));
}
