// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod scan;
mod schema;
mod write;

use std::fmt::{Display, Formatter};

pub const CRATE_NAME: &str = "mappings-index";

pub use scan::{is_enriched, scan_servers, server_folders, ScanFailure, ScanOptions, ScanReport};
pub use schema::SchemaValidator;
pub use write::{filter_index, write_csv_index, write_json_index, CSV_HEADER};

#[derive(Debug)]
pub struct IndexError(pub String);

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for IndexError {}

impl From<std::io::Error> for IndexError {
    fn from(err: std::io::Error) -> Self {
        Self(err.to_string())
    }
}
