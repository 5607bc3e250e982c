// SPDX-License-Identifier: Apache-2.0

use crate::scan::{server_folders, METADATA_FILE};
use crate::IndexError;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Compiled metadata schema. Compiled once per batch run, applied to every
/// server's raw document; validator errors are flattened into the same
/// human-readable strings the media validator produces.
pub struct SchemaValidator {
    compiled: JSONSchema,
}

impl SchemaValidator {
    pub fn from_file(path: &Path) -> Result<Self, IndexError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| IndexError(format!("failed to read schema {}: {e}", path.display())))?;
        let schema: Value = serde_json::from_str(&raw)
            .map_err(|e| IndexError(format!("schema {} is not valid JSON: {e}", path.display())))?;
        let compiled = JSONSchema::compile(&schema)
            .map_err(|e| IndexError(format!("schema {} failed to compile: {e}", path.display())))?;
        Ok(Self { compiled })
    }

    /// Violations for one raw metadata document, prefixed with the server label.
    #[must_use]
    pub fn validate_value(&self, label: &str, instance: &Value) -> Vec<String> {
        let mut out = Vec::new();
        if let Err(errors) = self.compiled.validate(instance) {
            for error in errors {
                let path = error.instance_path.to_string();
                if path.is_empty() {
                    out.push(format!("{label}: {error}"));
                } else {
                    out.push(format!("{label}: {path}: {error}"));
                }
            }
        }
        out
    }

    /// Validates every `metadata.json` under the servers directory and reports
    /// all violations in bulk.
    pub fn validate_dir(&self, servers_dir: &Path) -> Result<Vec<String>, IndexError> {
        let mut violations = Vec::new();
        for (folder, dir) in server_folders(servers_dir)? {
            let metadata_path = dir.join(METADATA_FILE);
            let raw = match fs::read_to_string(&metadata_path) {
                Ok(raw) => raw,
                Err(e) => {
                    violations.push(format!("{folder}: failed to read metadata.json: {e}"));
                    continue;
                }
            };
            match serde_json::from_str::<Value>(&raw) {
                Ok(instance) => violations.extend(self.validate_value(&folder, &instance)),
                Err(e) => violations.push(format!("{folder}: metadata.json is not JSON: {e}")),
            }
        }
        Ok(violations)
    }
}
