// SPDX-License-Identifier: Apache-2.0

use crate::MediaError;
use image::codecs::gif::GifDecoder;
use image::io::Reader;
use image::{AnimationDecoder, ImageFormat};
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Encodings the directory accepts. Everything else is carried as `Other` so a
/// violation message can name what was actually uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ImageFormatKind {
    Png,
    Gif,
    Other(String),
}

impl Display for ImageFormatKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Png => write!(f, "PNG"),
            Self::Gif => write!(f, "GIF"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageProbe {
    pub format: ImageFormatKind,
    pub width: u32,
    pub height: u32,
    pub has_alpha: bool,
}

impl ImageProbe {
    /// Aspect ratio rounded to `precision` decimal places, the way the
    /// geometry rules are written (1.78 for 16:9, 7.556 for 68:9).
    #[must_use]
    pub fn rounded_ratio(&self, precision: u32) -> f64 {
        let factor = 10f64.powi(precision as i32);
        let ratio = f64::from(self.width) / f64::from(self.height);
        (ratio * factor).round() / factor
    }
}

/// Decodes enough of the file to learn its real format, dimensions and color
/// type. Detection is content-based; the file extension is never trusted.
pub fn probe(path: &Path) -> Result<ImageProbe, MediaError> {
    let reader = Reader::open(path)
        .map_err(|e| MediaError(format!("failed to open {}: {e}", path.display())))?
        .with_guessed_format()
        .map_err(|e| MediaError(format!("failed to sniff {}: {e}", path.display())))?;
    let format = match reader.format() {
        Some(ImageFormat::Png) => ImageFormatKind::Png,
        Some(ImageFormat::Gif) => ImageFormatKind::Gif,
        Some(other) => ImageFormatKind::Other(format!("{other:?}")),
        None => ImageFormatKind::Other("unknown".to_string()),
    };
    let image = reader
        .decode()
        .map_err(|e| MediaError(format!("failed to decode {}: {e}", path.display())))?;
    Ok(ImageProbe {
        format,
        width: image.width(),
        height: image.height(),
        has_alpha: image.color().has_alpha(),
    })
}

/// Per-frame durations of an animated GIF, in milliseconds. A single-frame GIF
/// yields one entry.
pub fn gif_frame_durations_ms(path: &Path) -> Result<Vec<u64>, MediaError> {
    let file = File::open(path)
        .map_err(|e| MediaError(format!("failed to open {}: {e}", path.display())))?;
    let decoder = GifDecoder::new(BufReader::new(file))
        .map_err(|e| MediaError(format!("failed to decode {}: {e}", path.display())))?;
    let mut durations = Vec::new();
    for frame in decoder.into_frames() {
        let frame = frame.map_err(|e| MediaError(format!("bad frame in {}: {e}", path.display())))?;
        let (numer, denom) = frame.delay().numer_denom_ms();
        durations.push(rounded_delay_ms(numer, denom));
    }
    Ok(durations)
}

/// Frame delays come as a ratio; round to the nearest millisecond so repeated
/// fractional delays do not undercount a banner's total run time.
pub(crate) fn rounded_delay_ms(numer: u32, denom: u32) -> u64 {
    let denom = u64::from(denom.max(1));
    (u64::from(numer) + denom / 2) / denom
}

#[cfg(test)]
mod tests {
    use super::rounded_delay_ms;

    #[test]
    fn fractional_delays_round_to_nearest_millisecond() {
        assert_eq!(rounded_delay_ms(100, 3), 33);
        assert_eq!(rounded_delay_ms(200, 3), 67);
        assert_eq!(rounded_delay_ms(100, 1), 100);
        assert_eq!(rounded_delay_ms(100, 0), 100);
    }
}
