// SPDX-License-Identifier: Apache-2.0

use crate::IndexError;
use mappings_core::canonical::stable_sort_by_key;
use mappings_model::{AssetKind, ServerRecord};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const METADATA_FILE: &str = "metadata.json";

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub servers_dir: PathBuf,
    /// JSON array of server ids that are explicitly retired.
    pub inactive_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanFailure {
    pub folder: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ScanReport {
    /// Loaded records, sorted A-Z by id, with derived flags set and wildcard
    /// versions expanded.
    pub servers: Vec<ServerRecord>,
    /// Folders that could not be loaded; one batch run reports all of them.
    pub failures: Vec<ScanFailure>,
}

impl ScanReport {
    #[must_use]
    pub fn ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Immediate subfolders of the servers directory, sorted by name.
pub fn server_folders(servers_dir: &Path) -> Result<Vec<(String, PathBuf)>, IndexError> {
    if !servers_dir.is_dir() {
        return Err(IndexError(format!(
            "servers directory {} does not exist",
            servers_dir.display()
        )));
    }
    let mut folders = Vec::new();
    for entry in WalkDir::new(servers_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| IndexError(format!("walk failed: {e}")))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        folders.push((name, entry.into_path()));
    }
    Ok(folders)
}

fn load_inactive_ids(path: &Path) -> Result<BTreeSet<String>, IndexError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| IndexError(format!("failed to read {}: {e}", path.display())))?;
    let ids: Vec<String> = serde_json::from_str(&raw)
        .map_err(|e| IndexError(format!("{} is not a JSON array of ids: {e}", path.display())))?;
    Ok(ids.into_iter().collect())
}

/// A server earns prominent placement once it ships both a logo and a
/// background and declares a primary address.
#[must_use]
pub fn is_enriched(record: &ServerRecord, server_dir: &Path) -> bool {
    record.primary_address.is_some()
        && AssetKind::Logo.locate(server_dir).is_some()
        && AssetKind::Background.locate(server_dir).is_some()
}

/// Walks every server folder, loads and enriches its metadata. Bad folders are
/// collected, not fatal; the caller decides whether any failure fails the run.
pub fn scan_servers(options: &ScanOptions) -> Result<ScanReport, IndexError> {
    let inactive_ids = match &options.inactive_path {
        Some(path) => load_inactive_ids(path)?,
        None => BTreeSet::new(),
    };

    let mut report = ScanReport::default();
    for (folder, dir) in server_folders(&options.servers_dir)? {
        match load_one(&folder, &dir, &inactive_ids) {
            Ok(record) => report.servers.push(record),
            Err(message) => report.failures.push(ScanFailure { folder, message }),
        }
    }
    report.servers = stable_sort_by_key(report.servers, |s| s.id.clone());
    Ok(report)
}

fn load_one(
    folder: &str,
    dir: &Path,
    inactive_ids: &BTreeSet<String>,
) -> Result<ServerRecord, String> {
    let metadata_path = dir.join(METADATA_FILE);
    let raw = fs::read_to_string(&metadata_path)
        .map_err(|e| format!("failed to read {}: {e}", metadata_path.display()))?;
    let mut record: ServerRecord =
        serde_json::from_str(&raw).map_err(|e| format!("invalid metadata JSON: {e}"))?;

    if record.id.as_str() != folder {
        return Err(format!(
            "folder name {folder:?} does not match metadata id {:?}",
            record.id.as_str()
        ));
    }

    record.minecraft_versions = record.expanded_versions().map_err(|e| e.to_string())?;
    record.validate().map_err(|e| e.to_string())?;

    record.inactive = inactive_ids.contains(record.id.as_str());
    record.enriched = is_enriched(&record, dir);
    Ok(record)
}
