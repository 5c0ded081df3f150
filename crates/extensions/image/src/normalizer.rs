//! JPEG normalizer.

use async_trait::async_trait;
use image::GenericImageView;
use image::imageops::FilterType;
use tracing::debug;

use tourguide_protocols::{ImageDataUrl, ImageNormalizer, NormalizationError, RawImage};

use crate::image_utils::{decode_image, fit_within, image_to_base64};

pub const DEFAULT_MAX_DIMENSION: u32 = 1024;
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Downscales frames to fit a bounding box and re-encodes them as JPEG.
#[derive(Debug, Clone)]
pub struct JpegNormalizer {
    max_width: u32,
    max_height: u32,
    quality: u8,
}

impl JpegNormalizer {
    pub fn new(max_width: u32, max_height: u32, quality: u8) -> Self {
        Self {
            max_width: max_width.max(1),
            max_height: max_height.max(1),
            quality: quality.clamp(1, 100),
        }
    }

    /// Synchronous normalization; CPU-bound.
    pub fn normalize_bytes(
        &self,
        bytes: &[u8],
        mime_type: Option<&str>,
    ) -> Result<ImageDataUrl, NormalizationError> {
        if bytes.is_empty() {
            return Err(NormalizationError::EmptyImage);
        }

        let img = decode_image(bytes, mime_type)?;
        let (orig_width, orig_height) = img.dimensions();
        let (new_width, new_height) =
            fit_within(orig_width, orig_height, self.max_width, self.max_height);

        let img = if (new_width, new_height) == (orig_width, orig_height) {
            img
        } else {
            img.resize_exact(new_width, new_height, FilterType::Lanczos3)
        };

        debug!(
            "Normalized image from {}x{} to {}x{}",
            orig_width, orig_height, new_width, new_height
        );

        let data = image_to_base64(&img, self.quality)?;
        Ok(ImageDataUrl::new("image/jpeg", &data))
    }
}

impl Default for JpegNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIMENSION, DEFAULT_MAX_DIMENSION, DEFAULT_JPEG_QUALITY)
    }
}

#[async_trait]
impl ImageNormalizer for JpegNormalizer {
    async fn normalize(&self, raw: RawImage) -> Result<ImageDataUrl, NormalizationError> {
        let normalizer = self.clone();
        tokio::task::spawn_blocking(move || {
            normalizer.normalize_bytes(&raw.bytes, raw.mime_type.as_deref())
        })
        .await
        .map_err(|e| NormalizationError::Interrupted {
            reason: e.to_string(),
        })?
    }
}

#[cfg(test)]
#[path = "normalizer_tests.rs"]
mod tests;
