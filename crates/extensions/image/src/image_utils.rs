//! Shared image utility functions.

use std::io::Cursor;

use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use tracing::debug;

use tourguide_protocols::NormalizationError;

/// Decode `bytes`, trying the hinted format first.
///
/// A hint that does not match the content (a JPEG saved as `.png`) falls back
/// to sniffing the format from the bytes themselves.
pub fn decode_image(bytes: &[u8], mime_type: Option<&str>) -> Result<DynamicImage, NormalizationError> {
    if let Some(fmt) = mime_type.and_then(ImageFormat::from_mime_type) {
        match image::load_from_memory_with_format(bytes, fmt) {
            Ok(img) => return Ok(img),
            Err(e) => debug!(hint = ?fmt, error = %e, "Hinted format failed, sniffing content"),
        }
    }
    image::load_from_memory(bytes).map_err(|e| NormalizationError::Decode {
        reason: e.to_string(),
    })
}

/// Dimensions of `(width, height)` scaled down to fit `max_width` x `max_height`.
///
/// Never scales up, and keeps the aspect ratio.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    let ratio = (max_width as f64 / width as f64).min(max_height as f64 / height as f64);
    let scaled = |v: u32| ((v as f64 * ratio).round() as u32).max(1);
    (scaled(width).min(max_width), scaled(height).min(max_height))
}

pub fn image_to_base64(img: &DynamicImage, quality: u8) -> Result<String, NormalizationError> {
    let mut buffer = Cursor::new(Vec::new());
    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut buffer, quality))
        .map_err(|e| NormalizationError::Encode {
            reason: e.to_string(),
        })?;

    Ok(base64::engine::general_purpose::STANDARD.encode(buffer.into_inner()))
}
