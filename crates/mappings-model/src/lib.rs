// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod asset;
mod server;
mod versions;

pub use asset::{
    AssetKind, BANNER_ASPECT_RATIO, BANNER_MAX_ANIMATION_MS, BANNER_MIN_WIDTH,
    BACKGROUND_ASPECT_RATIO, BACKGROUND_MIN_WIDTH, LOGO_MIN_WIDTH, WORDMARK_MIN_HEIGHT,
};
pub use server::{
    parse_server_id, Color, ServerId, ServerRecord, Socials, ValidationError, SERVER_ID_MAX_LEN,
};
pub use versions::{expand_versions, is_wildcard, subversions};

pub const CRATE_NAME: &str = "mappings-model";
