//! File-backed capture device.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use image::ImageFormat;
use tracing::debug;

use tourguide_protocols::{CaptureDevice, CaptureError, RawImage};

/// A "camera" that yields the contents of an image file.
#[derive(Debug, Clone)]
pub struct FileCaptureDevice {
    path: PathBuf,
}

impl FileCaptureDevice {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CaptureDevice for FileCaptureDevice {
    async fn capture_frame(&self) -> Result<RawImage, CaptureError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CaptureError::AccessDenied {
                reason: format!("{}: {}", self.path.display(), e),
            })?;

        if bytes.is_empty() {
            return Err(CaptureError::NoFrame);
        }

        debug!("Captured {} bytes from {}", bytes.len(), self.path.display());

        let frame = RawImage::new(bytes);
        Ok(match ImageFormat::from_path(&self.path) {
            Ok(format) => frame.with_mime_type(format.to_mime_type()),
            Err(_) => frame,
        })
    }
}
