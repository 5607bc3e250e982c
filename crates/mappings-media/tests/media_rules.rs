// SPDX-License-Identifier: Apache-2.0

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use mappings_media::validate_server_media;
use mappings_model::AssetKind;
use std::fs::File;
use std::path::{Path, PathBuf};

fn server_dir(tmp: &tempfile::TempDir) -> PathBuf {
    let dir = tmp.path().join("servers").join("testserver");
    std::fs::create_dir_all(&dir).expect("server dir");
    dir
}

fn write_png_rgb(dir: &Path, name: &str, width: u32, height: u32) {
    let img = RgbImage::from_pixel(width, height, Rgb([120, 40, 200]));
    img.save_with_format(dir.join(name), ImageFormat::Png)
        .expect("png fixture");
}

fn write_png_rgba(dir: &Path, name: &str, width: u32, height: u32) {
    let img = RgbaImage::from_pixel(width, height, Rgba([120, 40, 200, 128]));
    img.save_with_format(dir.join(name), ImageFormat::Png)
        .expect("png fixture");
}

fn write_gif(dir: &Path, name: &str, width: u32, height: u32, frame_delays_ms: &[u32]) {
    let file = File::create(dir.join(name)).expect("gif file");
    let mut encoder = GifEncoder::new(file);
    let frames: Vec<Frame> = frame_delays_ms
        .iter()
        .map(|ms| {
            Frame::from_parts(
                RgbaImage::from_pixel(width, height, Rgba([10, 200, 30, 255])),
                0,
                0,
                Delay::from_numer_denom_ms(*ms, 1),
            )
        })
        .collect();
    encoder.encode_frames(frames).expect("gif fixture");
}

fn valid_logo(dir: &Path) {
    write_png_rgba(dir, "logo.png", 512, 512);
}

#[test]
fn missing_logo_is_the_only_required_asset_violation() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = server_dir(&tmp);
    let result = validate_server_media("testserver", &dir);
    assert_eq!(result.violations.len(), 1);
    assert!(result.violations[0].contains("logo is missing"));
    assert!(result.present.is_empty());
}

#[test]
fn conforming_full_folder_passes() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = server_dir(&tmp);
    valid_logo(&dir);
    write_png_rgb(&dir, "background.png", 1920, 1080);
    write_png_rgb(&dir, "banner.png", 680, 90);
    write_png_rgba(&dir, "wordmark.png", 600, 120);

    let result = validate_server_media("testserver", &dir);
    assert!(result.ok(), "violations: {:?}", result.violations);
    assert_eq!(result.present.len(), 4);
    assert!(result.has(AssetKind::Banner));
}

#[test]
fn logo_rejects_non_square() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = server_dir(&tmp);
    write_png_rgba(&dir, "logo.png", 640, 480);
    let result = validate_server_media("testserver", &dir);
    assert!(result
        .violations
        .iter()
        .any(|v| v.contains("logo must be square, got 640x480")));
}

#[test]
fn logo_rejects_width_under_512() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = server_dir(&tmp);
    write_png_rgba(&dir, "logo.png", 256, 256);
    let result = validate_server_media("testserver", &dir);
    assert_eq!(result.violations.len(), 1);
    assert!(result.violations[0].contains("at least 512px, got 256"));
}

#[test]
fn logo_rejects_non_png_content_despite_extension() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = server_dir(&tmp);
    write_gif(&dir, "logo.png", 512, 512, &[100]);
    let result = validate_server_media("testserver", &dir);
    assert!(result
        .violations
        .iter()
        .any(|v| v.contains("logo must be a PNG, got GIF")));
}

#[test]
fn background_rejects_wrong_aspect_ratio() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = server_dir(&tmp);
    valid_logo(&dir);
    write_png_rgb(&dir, "background.png", 2000, 2000);
    let result = validate_server_media("testserver", &dir);
    assert!(result
        .violations
        .iter()
        .any(|v| v.contains("background aspect ratio must round to 1.78")));
}

#[test]
fn background_accepts_rounded_sixteen_by_nine() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = server_dir(&tmp);
    valid_logo(&dir);
    // 1920/1080 = 1.777..., which rounds to exactly 1.78 at two places.
    write_png_rgb(&dir, "background.png", 1920, 1080);
    let result = validate_server_media("testserver", &dir);
    assert!(result.ok(), "violations: {:?}", result.violations);
}

#[test]
fn background_rejects_width_under_1920() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = server_dir(&tmp);
    valid_logo(&dir);
    write_png_rgb(&dir, "background.png", 1280, 720);
    let result = validate_server_media("testserver", &dir);
    assert!(result
        .violations
        .iter()
        .any(|v| v.contains("background width must be at least 1920px")));
}

#[test]
fn banner_gif_over_duration_ceiling_is_rejected() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = server_dir(&tmp);
    valid_logo(&dir);
    write_gif(&dir, "banner.gif", 680, 90, &[8000, 8000]);
    let result = validate_server_media("testserver", &dir);
    assert!(result
        .violations
        .iter()
        .any(|v| v.contains("16000ms, over the 15000ms limit")));
}

#[test]
fn banner_gif_within_duration_ceiling_passes() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = server_dir(&tmp);
    valid_logo(&dir);
    write_gif(&dir, "banner.gif", 680, 90, &[5000, 5000, 5000]);
    let result = validate_server_media("testserver", &dir);
    assert!(result.ok(), "violations: {:?}", result.violations);
}

#[test]
fn banner_rejects_wrong_aspect_ratio() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = server_dir(&tmp);
    valid_logo(&dir);
    write_png_rgb(&dir, "banner.png", 340, 90);
    let result = validate_server_media("testserver", &dir);
    assert!(result
        .violations
        .iter()
        .any(|v| v.contains("banner aspect ratio must round to 7.556")));
}

#[test]
fn wordmark_requires_alpha_channel() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = server_dir(&tmp);
    valid_logo(&dir);
    write_png_rgb(&dir, "wordmark.png", 600, 120);
    let result = validate_server_media("testserver", &dir);
    assert!(result
        .violations
        .iter()
        .any(|v| v.contains("wordmark must carry an alpha channel")));
}

#[test]
fn wordmark_rejects_height_under_100() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = server_dir(&tmp);
    valid_logo(&dir);
    write_png_rgba(&dir, "wordmark.png", 600, 64);
    let result = validate_server_media("testserver", &dir);
    assert!(result
        .violations
        .iter()
        .any(|v| v.contains("wordmark height must be at least 100px, got 64")));
}

#[test]
fn undecodable_file_becomes_a_violation_not_a_panic() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = server_dir(&tmp);
    std::fs::write(dir.join("logo.png"), b"not an image at all").expect("junk file");
    let result = validate_server_media("testserver", &dir);
    assert_eq!(result.violations.len(), 1);
    assert!(result.violations[0].starts_with("testserver: logo:"));
}
