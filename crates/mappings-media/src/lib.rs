// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod convert;
mod logging;
mod probe;
mod spritesheet;
mod validate;

use std::fmt::{Display, Formatter};

pub const CRATE_NAME: &str = "mappings-media";

pub use convert::{
    convert_all, convert_server_media, ConvertOptions, ConvertReport, LOGO_BASE_SIZE, WEBP_QUALITY,
};
pub use logging::{ConvertEvent, ConvertLog, ConvertStage};
pub use probe::{gif_frame_durations_ms, probe, ImageFormatKind, ImageProbe};
pub use spritesheet::{build_spritesheet, total_duration_ms, FrameMetadata, Spritesheet};
pub use validate::{validate_server_media, MediaValidation};

#[derive(Debug)]
pub struct MediaError(pub String);

impl Display for MediaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for MediaError {}

impl From<std::io::Error> for MediaError {
    fn from(err: std::io::Error) -> Self {
        Self(err.to_string())
    }
}

impl From<image::ImageError> for MediaError {
    fn from(err: image::ImageError) -> Self {
        Self(err.to_string())
    }
}
