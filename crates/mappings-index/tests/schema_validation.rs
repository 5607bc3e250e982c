// SPDX-License-Identifier: Apache-2.0

use mappings_index::SchemaValidator;
use serde_json::json;
use std::fs;

const METADATA_SCHEMA: &str = r#"{
    "type": "object",
    "required": ["id", "name"],
    "properties": {
        "id": {"type": "string", "pattern": "^[a-z0-9]+$"},
        "name": {"type": "string", "minLength": 1},
        "addresses": {"type": "array", "items": {"type": "string"}}
    }
}"#;

fn validator(tmp: &tempfile::TempDir) -> SchemaValidator {
    let schema_path = tmp.path().join("metadata.schema.json");
    fs::write(&schema_path, METADATA_SCHEMA).expect("schema file");
    SchemaValidator::from_file(&schema_path).expect("compile schema")
}

#[test]
fn conforming_document_has_no_violations() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let validator = validator(&tmp);
    let instance = json!({"id": "hypixel", "name": "Hypixel", "addresses": ["mc.hypixel.net"]});
    assert!(validator.validate_value("hypixel", &instance).is_empty());
}

#[test]
fn violations_are_prefixed_and_readable() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let validator = validator(&tmp);
    let instance = json!({"id": "Hypixel", "addresses": [42]});
    let violations = validator.validate_value("hypixel", &instance);
    assert!(!violations.is_empty());
    for violation in &violations {
        assert!(violation.starts_with("hypixel:"), "got {violation}");
    }
}

#[test]
fn validate_dir_reports_all_folders_in_bulk() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let validator = validator(&tmp);

    let servers_dir = tmp.path().join("servers");
    for (id, body) in [
        ("goodserver", r#"{"id": "goodserver", "name": "Good"}"#),
        ("badserver", r#"{"id": "badserver"}"#),
        ("notjson", "oops"),
    ] {
        let dir = servers_dir.join(id);
        fs::create_dir_all(&dir).expect("dir");
        fs::write(dir.join("metadata.json"), body).expect("metadata");
    }

    let violations = validator.validate_dir(&servers_dir).expect("walk");
    assert!(violations.iter().any(|v| v.starts_with("badserver:")));
    assert!(violations.iter().any(|v| v.starts_with("notjson:")));
    assert!(!violations.iter().any(|v| v.starts_with("goodserver:")));
}

#[test]
fn invalid_schema_file_is_a_hard_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let schema_path = tmp.path().join("broken.schema.json");
    fs::write(&schema_path, "{").expect("schema file");
    assert!(SchemaValidator::from_file(&schema_path).is_err());
}
