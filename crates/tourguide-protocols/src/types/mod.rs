//! Common types used across the tour guide.

mod history;
mod image;
mod location;

pub use history::*;
pub use image::*;
pub use location::*;
