// SPDX-License-Identifier: Apache-2.0

//! Animated banners ship to the web as one vertically-stacked spritesheet plus
//! a sidecar with per-frame durations, so clients can animate without a GIF
//! decoder.

use crate::probe::rounded_delay_ms;
use crate::MediaError;
use image::codecs::gif::GifDecoder;
use image::{imageops, AnimationDecoder, RgbaImage};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Sidecar written next to the spritesheet as `{id}.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameMetadata {
    pub frame_height: u32,
    /// Display duration of each frame, top to bottom, in milliseconds.
    pub frames: Vec<u64>,
}

#[derive(Debug, Clone)]
pub struct Spritesheet {
    pub image: RgbaImage,
    pub metadata: FrameMetadata,
}

#[must_use]
pub fn total_duration_ms(durations: &[u64]) -> u64 {
    durations.iter().sum()
}

/// Decodes an animated GIF and stacks every frame vertically into one image.
pub fn build_spritesheet(path: &Path) -> Result<Spritesheet, MediaError> {
    let file = File::open(path)
        .map_err(|e| MediaError(format!("failed to open {}: {e}", path.display())))?;
    let decoder = GifDecoder::new(BufReader::new(file))
        .map_err(|e| MediaError(format!("failed to decode {}: {e}", path.display())))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| MediaError(format!("bad frame in {}: {e}", path.display())))?;
    if frames.is_empty() {
        return Err(MediaError(format!("{} has no frames", path.display())));
    }

    let width = frames[0].buffer().width();
    let frame_height = frames[0].buffer().height();
    for (i, frame) in frames.iter().enumerate() {
        if frame.buffer().width() != width || frame.buffer().height() != frame_height {
            return Err(MediaError(format!(
                "{}: frame {i} is {}x{}, expected {width}x{frame_height}",
                path.display(),
                frame.buffer().width(),
                frame.buffer().height()
            )));
        }
    }

    let count = u32::try_from(frames.len())
        .map_err(|_| MediaError(format!("{} has too many frames", path.display())))?;
    let height = sheet_height(frame_height, count).ok_or_else(|| {
        MediaError(format!(
            "{}: {count} frames of {frame_height}px overflow the sheet height",
            path.display()
        ))
    })?;
    let mut sheet = RgbaImage::new(width, height);
    let mut durations = Vec::with_capacity(frames.len());
    for (i, frame) in frames.iter().enumerate() {
        let (numer, denom) = frame.delay().numer_denom_ms();
        durations.push(rounded_delay_ms(numer, denom));
        imageops::replace(
            &mut sheet,
            frame.buffer(),
            0,
            i64::from(frame_height) * i as i64,
        );
    }

    Ok(Spritesheet {
        image: sheet,
        metadata: FrameMetadata {
            frame_height,
            frames: durations,
        },
    })
}

fn sheet_height(frame_height: u32, count: u32) -> Option<u32> {
    frame_height.checked_mul(count)
}

#[cfg(test)]
mod tests {
    use super::sheet_height;

    #[test]
    fn sheet_height_rejects_overflow() {
        assert_eq!(sheet_height(90, 3), Some(270));
        assert_eq!(sheet_height(u32::MAX, 2), None);
        assert_eq!(sheet_height(70_000, 70_000), None);
    }
}
