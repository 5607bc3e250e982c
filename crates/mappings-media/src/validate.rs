// SPDX-License-Identifier: Apache-2.0

use crate::probe::{gif_frame_durations_ms, probe, ImageFormatKind, ImageProbe};
use crate::spritesheet::total_duration_ms;
use mappings_model::{
    AssetKind, BANNER_ASPECT_RATIO, BANNER_MAX_ANIMATION_MS, BANNER_MIN_WIDTH,
    BACKGROUND_ASPECT_RATIO, BACKGROUND_MIN_WIDTH, LOGO_MIN_WIDTH, WORDMARK_MIN_HEIGHT,
};
use std::path::Path;

/// Outcome of checking one server folder. Violations are human-readable and
/// reported in bulk; a missing optional asset is simply not counted as present.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MediaValidation {
    pub violations: Vec<String>,
    pub present: Vec<AssetKind>,
}

impl MediaValidation {
    #[must_use]
    pub fn ok(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn has(&self, kind: AssetKind) -> bool {
        self.present.contains(&kind)
    }
}

/// Applies every per-asset rule to one server folder. Never fails outright:
/// unreadable or undecodable files become violations like everything else.
#[must_use]
pub fn validate_server_media(label: &str, server_dir: &Path) -> MediaValidation {
    let mut out = MediaValidation::default();
    for kind in AssetKind::ALL {
        let Some(path) = kind.locate(server_dir) else {
            if kind.required() {
                out.violations.push(format!(
                    "{label}: {kind} is missing ({} is required)",
                    kind.file_names()[0]
                ));
            }
            continue;
        };
        out.present.push(kind);
        let probe = match probe(&path) {
            Ok(probe) => probe,
            Err(e) => {
                out.violations.push(format!("{label}: {kind}: {e}"));
                continue;
            }
        };
        check_asset(label, kind, &path, &probe, &mut out.violations);
    }
    out
}

fn check_asset(
    label: &str,
    kind: AssetKind,
    path: &Path,
    probe: &ImageProbe,
    violations: &mut Vec<String>,
) {
    match kind {
        AssetKind::Logo => {
            if probe.format != ImageFormatKind::Png {
                violations.push(format!(
                    "{label}: logo must be a PNG, got {}",
                    probe.format
                ));
            }
            if probe.width != probe.height {
                violations.push(format!(
                    "{label}: logo must be square, got {}x{}",
                    probe.width, probe.height
                ));
            }
            if probe.width < LOGO_MIN_WIDTH {
                violations.push(format!(
                    "{label}: logo width must be at least {LOGO_MIN_WIDTH}px, got {}",
                    probe.width
                ));
            }
        }
        AssetKind::Background => {
            if probe.format != ImageFormatKind::Png {
                violations.push(format!(
                    "{label}: background must be a PNG, got {}",
                    probe.format
                ));
            }
            let ratio = probe.rounded_ratio(2);
            if (ratio - BACKGROUND_ASPECT_RATIO).abs() > f64::EPSILON {
                violations.push(format!(
                    "{label}: background aspect ratio must round to {BACKGROUND_ASPECT_RATIO} (16:9), got {ratio}"
                ));
            }
            if probe.width < BACKGROUND_MIN_WIDTH {
                violations.push(format!(
                    "{label}: background width must be at least {BACKGROUND_MIN_WIDTH}px, got {}",
                    probe.width
                ));
            }
        }
        AssetKind::Banner => {
            if probe.format != ImageFormatKind::Png && probe.format != ImageFormatKind::Gif {
                violations.push(format!(
                    "{label}: banner must be a PNG or GIF, got {}",
                    probe.format
                ));
            }
            let ratio = probe.rounded_ratio(3);
            if (ratio - BANNER_ASPECT_RATIO).abs() > f64::EPSILON {
                violations.push(format!(
                    "{label}: banner aspect ratio must round to {BANNER_ASPECT_RATIO} (68:9), got {ratio}"
                ));
            }
            if probe.width < BANNER_MIN_WIDTH {
                violations.push(format!(
                    "{label}: banner width must be at least {BANNER_MIN_WIDTH}px, got {}",
                    probe.width
                ));
            }
            if probe.format == ImageFormatKind::Gif {
                match gif_frame_durations_ms(path) {
                    Ok(durations) => {
                        let total = total_duration_ms(&durations);
                        if total > BANNER_MAX_ANIMATION_MS {
                            violations.push(format!(
                                "{label}: banner animation runs {total}ms, over the {BANNER_MAX_ANIMATION_MS}ms limit"
                            ));
                        }
                    }
                    Err(e) => violations.push(format!("{label}: banner: {e}")),
                }
            }
        }
        AssetKind::Wordmark => {
            if probe.format != ImageFormatKind::Png {
                violations.push(format!(
                    "{label}: wordmark must be a PNG, got {}",
                    probe.format
                ));
            }
            if !probe.has_alpha {
                violations.push(format!(
                    "{label}: wordmark must carry an alpha channel"
                ));
            }
            if probe.height < WORDMARK_MIN_HEIGHT {
                violations.push(format!(
                    "{label}: wordmark height must be at least {WORDMARK_MIN_HEIGHT}px, got {}",
                    probe.height
                ));
            }
        }
    }
}
