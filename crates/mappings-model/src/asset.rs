// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

pub const LOGO_MIN_WIDTH: u32 = 512;
pub const BACKGROUND_MIN_WIDTH: u32 = 1920;
pub const BACKGROUND_ASPECT_RATIO: f64 = 1.78;
pub const BANNER_MIN_WIDTH: u32 = 340;
pub const BANNER_ASPECT_RATIO: f64 = 7.556;
pub const BANNER_MAX_ANIMATION_MS: u64 = 15_000;
pub const WORDMARK_MIN_HEIGHT: u32 = 100;

/// The four image assets a server folder may carry. Only the logo is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    Logo,
    Background,
    Banner,
    Wordmark,
}

impl AssetKind {
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Logo,
        AssetKind::Background,
        AssetKind::Banner,
        AssetKind::Wordmark,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::Background => "background",
            Self::Banner => "banner",
            Self::Wordmark => "wordmark",
        }
    }

    #[must_use]
    pub const fn required(self) -> bool {
        matches!(self, Self::Logo)
    }

    /// File names this asset may use inside a server folder, in lookup order.
    #[must_use]
    pub const fn file_names(self) -> &'static [&'static str] {
        match self {
            Self::Logo => &["logo.png"],
            Self::Background => &["background.png"],
            Self::Banner => &["banner.png", "banner.gif"],
            Self::Wordmark => &["wordmark.png"],
        }
    }

    /// First existing source file for this asset under `server_dir`, if any.
    #[must_use]
    pub fn locate(self, server_dir: &Path) -> Option<PathBuf> {
        self.file_names()
            .iter()
            .map(|name| server_dir.join(name))
            .find(|p| p.is_file())
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
