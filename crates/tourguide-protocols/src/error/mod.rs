//! Error types for the tour guide protocol layer.
//!
//! Every `Display` string is meant to be shown to the user as-is. Technical
//! detail travels in `detail`/`reason` fields and is only logged.

mod device;
mod geolocation;
mod normalization;
mod persistence;
mod service;

pub use device::*;
pub use geolocation::*;
pub use normalization::*;
pub use persistence::*;
pub use service::*;
