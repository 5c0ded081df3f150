//! Image handling for the tour guide.
//!
//! - [`JpegNormalizer`] - bounds a captured frame and re-encodes it as a JPEG data URL
//! - [`FileCaptureDevice`] - treats an image file on disk as the camera

mod capture;
mod image_utils;
mod normalizer;

pub use capture::FileCaptureDevice;
pub use image_utils::{fit_within, image_to_base64};
pub use normalizer::JpegNormalizer;
