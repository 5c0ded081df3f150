//! Image capture and normalization protocols.

use async_trait::async_trait;

use crate::error::{CaptureError, NormalizationError};
use crate::types::{ImageDataUrl, RawImage};

/// Produces a raw frame on demand.
#[async_trait]
pub trait CaptureDevice: Send + Sync {
    async fn capture_frame(&self) -> Result<RawImage, CaptureError>;
}

/// Rescales and re-encodes a raw frame into a bounded, storable data URL.
#[async_trait]
pub trait ImageNormalizer: Send + Sync {
    async fn normalize(&self, raw: RawImage) -> Result<ImageDataUrl, NormalizationError>;
}
