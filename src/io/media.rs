// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Exercise image loading.
//!
//! Uploaded images are kept in the draft as `data:` URLs so a snapshot is
//! self-contained. This module converts between files, data URLs and RGBA
//! pixels suitable for an egui texture.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

/// Decoded image ready for display.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    pub data_url: String,
}

/// Guess a MIME type from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Encode raw file bytes as a base64 data URL.
pub fn encode_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Extract the raw bytes of a base64 data URL.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let rest = url
        .strip_prefix("data:")
        .context("Image is not a data URL")?;
    let (header, payload) = rest
        .split_once(',')
        .context("Data URL has no payload separator")?;
    if !header.ends_with(";base64") {
        anyhow::bail!("Data URL is not base64 encoded");
    }
    STANDARD
        .decode(payload.trim())
        .context("Data URL payload is not valid base64")
}

/// Decode image bytes into RGBA pixels.
fn decode_pixels(bytes: &[u8], data_url: String) -> Result<LoadedImage> {
    let img = image::load_from_memory(bytes).context("Unsupported or corrupt image")?;
    let rgba = img.to_rgba8();
    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
        data_url,
    })
}

/// Load an image file from disk.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    let data_url = encode_data_url(&bytes, mime_for_path(path));
    decode_pixels(&bytes, data_url)
}

/// Decode a data URL restored from a snapshot.
pub fn load_data_url(url: &str) -> Result<LoadedImage> {
    let bytes = decode_data_url(url)?;
    decode_pixels(&bytes, url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(2, 3, image::Rgba([200, 10, 10, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_data_url_preview() {
        let url = encode_data_url(&tiny_png(), "image/png");
        assert!(url.starts_with("data:image/png;base64,"));

        let loaded = load_data_url(&url).unwrap();
        assert_eq!((loaded.width, loaded.height), (2, 3));
        assert_eq!(loaded.pixels.len(), 2 * 3 * 4);
        assert_eq!(loaded.data_url, url);
    }

    #[test]
    fn test_rejects_non_data_urls() {
        assert!(decode_data_url("https://example.com/curl.png").is_err());
        assert!(decode_data_url("data:image/png,rawtext").is_err());
        assert!(decode_data_url("data:image/png;base64,***").is_err());
    }

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_for_path(Path::new("a/b/Curl.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("machine.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("notes")), "application/octet-stream");
    }
}
