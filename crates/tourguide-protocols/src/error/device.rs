//! Capture, narration and share errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Could not access the camera. Please check permissions.")]
    AccessDenied { reason: String },

    #[error("The camera did not produce an image.")]
    NoFrame,
}

#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("Narration is not available: {0}")]
    Unavailable(String),

    #[error("Narration failed: {0}")]
    Playback(String),
}

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Failed to share.")]
    Failed { reason: String },
}
