// SPDX-License-Identifier: Apache-2.0

use crate::IndexError;
use mappings_core::canonical::{stable_json_bytes, stable_json_pretty};
use mappings_model::ServerRecord;
use std::fs;
use std::path::Path;

pub const CSV_HEADER: [&str; 7] = [
    "id",
    "name",
    "primary_address",
    "addresses",
    "versions",
    "inactive",
    "enriched",
];

/// Records that belong in the published index. Retired servers stay out unless
/// the caller explicitly asks for them.
#[must_use]
pub fn filter_index(servers: &[ServerRecord], include_inactive: bool) -> Vec<&ServerRecord> {
    servers
        .iter()
        .filter(|s| include_inactive || !s.inactive)
        .collect()
}

pub fn write_json_index(
    servers: &[ServerRecord],
    out: &Path,
    include_inactive: bool,
    pretty: bool,
) -> Result<usize, IndexError> {
    let selected = filter_index(servers, include_inactive);
    let bytes = if pretty {
        stable_json_pretty(&selected)
    } else {
        stable_json_bytes(&selected)
    }
    .map_err(|e| IndexError(format!("failed to serialize index: {e}")))?;
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(out, bytes)
        .map_err(|e| IndexError(format!("failed to write {}: {e}", out.display())))?;
    Ok(selected.len())
}

pub fn write_csv_index(
    servers: &[ServerRecord],
    out: &Path,
    include_inactive: bool,
) -> Result<usize, IndexError> {
    let selected = filter_index(servers, include_inactive);
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(out)
        .map_err(|e| IndexError(format!("failed to open {}: {e}", out.display())))?;
    writer
        .write_record(CSV_HEADER)
        .map_err(|e| IndexError(format!("csv write failed: {e}")))?;
    for server in &selected {
        let addresses = server.addresses.join(";");
        let versions = server.minecraft_versions.join(";");
        writer
            .write_record([
                server.id.as_str(),
                server.name.as_str(),
                server.primary_address.as_deref().unwrap_or(""),
                addresses.as_str(),
                versions.as_str(),
                if server.inactive { "true" } else { "false" },
                if server.enriched { "true" } else { "false" },
            ])
            .map_err(|e| IndexError(format!("csv write failed: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| IndexError(format!("csv flush failed: {e}")))?;
    Ok(selected.len())
}
