//! # Tour Guide Protocols
//!
//! Shared types and capability traits for the tour guide.
//! Contains only interface definitions - no implementations.
//!
//! ## Capabilities
//!
//! - [`KeyValueStorage`] - Durable text storage addressed by key
//! - [`DescriptionService`] - Remote image/location description
//! - [`ImageNormalizer`] - Bounded resize and re-encode of captured images
//! - [`CaptureDevice`] - Produces a raw frame on demand
//! - [`GeolocationProvider`] - Current device position
//! - [`NarrationEngine`] - Single-utterance speech playback
//! - [`ShareTarget`] - System share sheet or clipboard

pub mod device;
pub mod error;
pub mod image;
pub mod service;
pub mod storage;
pub mod types;

pub use device::{GeolocationProvider, NarrationEngine, ShareTarget};
pub use error::{
    CaptureError, DescribeError, GeolocationError, NarrationError, NormalizationError,
    PersistenceError, ServiceError, ShareError,
};
pub use image::{CaptureDevice, ImageNormalizer};
pub use service::DescriptionService;
pub use storage::KeyValueStorage;
pub use types::*;
