// SPDX-License-Identifier: Apache-2.0

use crate::logging::{ConvertLog, ConvertStage};
use crate::probe::{probe, ImageFormatKind};
use crate::spritesheet::build_spritesheet;
use crate::MediaError;
use image::imageops::FilterType;
use image::DynamicImage;
use mappings_core::canonical::stable_json_bytes;
use mappings_core::sha256_hex;
use mappings_model::{AssetKind, ServerId, ServerRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const WEBP_QUALITY: f32 = 90.0;
pub const LOGO_BASE_SIZE: u32 = 512;

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub servers_dir: PathBuf,
    pub logos_out: PathBuf,
    pub backgrounds_out: PathBuf,
    pub banners_out: PathBuf,
    /// Extra square logo sizes, each emitted as `{id}-{size}.webp`.
    pub sizes: Vec<u32>,
    pub lossless: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertReport {
    pub logos: usize,
    pub backgrounds: usize,
    pub banners: usize,
    pub animated_banners: usize,
    /// sha256 of every emitted file, keyed by `<group>/<file name>`.
    pub checksums: BTreeMap<String, String>,
}

/// Converts every server's media. The first conversion error terminates the
/// batch; validation has already run by the time CI reaches this step.
pub fn convert_all(
    servers: &[ServerRecord],
    options: &ConvertOptions,
) -> Result<(ConvertReport, ConvertLog), MediaError> {
    for out in [&options.logos_out, &options.backgrounds_out, &options.banners_out] {
        fs::create_dir_all(out)
            .map_err(|e| MediaError(format!("failed to create {}: {e}", out.display())))?;
    }
    let mut report = ConvertReport::default();
    let mut log = ConvertLog::default();
    for server in servers {
        convert_server_media(&server.id, options, &mut report, &mut log)?;
    }
    log.emit_kv(
        ConvertStage::Finalize,
        "batch",
        "servers",
        &servers.len().to_string(),
    );
    Ok((report, log))
}

/// Converts one server folder's assets into their published variants.
pub fn convert_server_media(
    id: &ServerId,
    options: &ConvertOptions,
    report: &mut ConvertReport,
    log: &mut ConvertLog,
) -> Result<(), MediaError> {
    let server_dir = options.servers_dir.join(id.as_str());

    // Logo is required; a missing one fails the batch like the original jobs.
    let logo_path = AssetKind::Logo.locate(&server_dir).ok_or_else(|| {
        MediaError(format!("{id}: logo.png not found in {}", server_dir.display()))
    })?;
    convert_logo(id, &logo_path, options, report, log)?;
    report.logos += 1;

    if let Some(path) = AssetKind::Background.locate(&server_dir) {
        convert_background(id, &path, options, report, log)?;
        report.backgrounds += 1;
    }

    if let Some(path) = AssetKind::Banner.locate(&server_dir) {
        let animated = convert_banner(id, &path, options, report, log)?;
        report.banners += 1;
        if animated {
            report.animated_banners += 1;
        }
    }

    Ok(())
}

fn convert_logo(
    id: &ServerId,
    path: &Path,
    options: &ConvertOptions,
    report: &mut ConvertReport,
    log: &mut ConvertLog,
) -> Result<(), MediaError> {
    let image = open(path)?;
    log.emit_kv(ConvertStage::Load, "logo", "server", id.as_str());
    copy_original(id, path, &options.logos_out, "logos", report)?;

    let base = resize_square(&image, LOGO_BASE_SIZE, log);
    write_webp(
        &base,
        &options.logos_out.join(format!("{id}.webp")),
        "logos",
        options.lossless,
        report,
        log,
    )?;
    for size in &options.sizes {
        let resized = resize_square(&image, *size, log);
        write_webp(
            &resized,
            &options.logos_out.join(format!("{id}-{size}.webp")),
            "logos",
            options.lossless,
            report,
            log,
        )?;
    }
    Ok(())
}

fn convert_background(
    id: &ServerId,
    path: &Path,
    options: &ConvertOptions,
    report: &mut ConvertReport,
    log: &mut ConvertLog,
) -> Result<(), MediaError> {
    let image = open(path)?;
    log.emit_kv(ConvertStage::Load, "background", "server", id.as_str());
    copy_original(id, path, &options.backgrounds_out, "backgrounds", report)?;
    // Backgrounds keep their source resolution; only the encoding changes.
    write_webp(
        &image,
        &options.backgrounds_out.join(format!("{id}.webp")),
        "backgrounds",
        options.lossless,
        report,
        log,
    )
}

/// Returns whether the banner was animated.
fn convert_banner(
    id: &ServerId,
    path: &Path,
    options: &ConvertOptions,
    report: &mut ConvertReport,
    log: &mut ConvertLog,
) -> Result<bool, MediaError> {
    let probe = probe(path)?;
    log.emit_kv(ConvertStage::Load, "banner", "server", id.as_str());
    copy_original(id, path, &options.banners_out, "banners", report)?;

    if probe.format == ImageFormatKind::Gif {
        let sheet = build_spritesheet(path)?;
        if sheet.metadata.frames.len() > 1 {
            write_webp(
                &DynamicImage::ImageRgba8(sheet.image),
                &options.banners_out.join(format!("{id}.webp")),
                "banners",
                options.lossless,
                report,
                log,
            )?;
            let sidecar = options.banners_out.join(format!("{id}.json"));
            let bytes = stable_json_bytes(&sheet.metadata)
                .map_err(|e| MediaError(format!("failed to serialize frame metadata: {e}")))?;
            record_output(&sidecar, "banners", &bytes, report)?;
            log.emit_kv(
                ConvertStage::Sidecar,
                "banner",
                "frames",
                &sheet.metadata.frames.len().to_string(),
            );
            return Ok(true);
        }
    }

    let image = open(path)?;
    write_webp(
        &image,
        &options.banners_out.join(format!("{id}.webp")),
        "banners",
        options.lossless,
        report,
        log,
    )?;
    Ok(false)
}

/// The untouched source file ships alongside the re-encodings, keeping its own
/// extension (`{id}.png`, or `{id}.gif` for animated banners).
fn copy_original(
    id: &ServerId,
    path: &Path,
    out_dir: &Path,
    group: &str,
    report: &mut ConvertReport,
) -> Result<(), MediaError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_string());
    let bytes = fs::read(path)
        .map_err(|e| MediaError(format!("failed to read {}: {e}", path.display())))?;
    record_output(&out_dir.join(format!("{id}.{ext}")), group, &bytes, report)
}

fn open(path: &Path) -> Result<DynamicImage, MediaError> {
    image::open(path).map_err(|e| MediaError(format!("failed to decode {}: {e}", path.display())))
}

fn resize_square(image: &DynamicImage, size: u32, log: &mut ConvertLog) -> DynamicImage {
    if image.width() == size && image.height() == size {
        return image.clone();
    }
    log.emit_kv(ConvertStage::Resize, "square", "size", &size.to_string());
    image.resize_exact(size, size, FilterType::Lanczos3)
}

fn encode_webp(image: &DynamicImage, lossless: bool) -> Vec<u8> {
    let rgba = image.to_rgba8();
    let encoder = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height());
    let memory = if lossless {
        encoder.encode_lossless()
    } else {
        encoder.encode(WEBP_QUALITY)
    };
    memory.to_vec()
}

fn write_webp(
    image: &DynamicImage,
    out: &Path,
    group: &str,
    lossless: bool,
    report: &mut ConvertReport,
    log: &mut ConvertLog,
) -> Result<(), MediaError> {
    let bytes = encode_webp(image, lossless);
    log.emit_kv(
        ConvertStage::Encode,
        "webp",
        "bytes",
        &bytes.len().to_string(),
    );
    record_output(out, group, &bytes, report)
}

fn record_output(
    out: &Path,
    group: &str,
    bytes: &[u8],
    report: &mut ConvertReport,
) -> Result<(), MediaError> {
    fs::write(out, bytes)
        .map_err(|e| MediaError(format!("failed to write {}: {e}", out.display())))?;
    let file_name = out
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    report
        .checksums
        .insert(format!("{group}/{file_name}"), sha256_hex(bytes));
    Ok(())
}
