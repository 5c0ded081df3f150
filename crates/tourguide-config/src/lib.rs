//! # Tour Guide Config
//!
//! Configuration management for the tour guide.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{
    ConfigValidator, LATITUDE_RANGE, LONGITUDE_RANGE, ValidationError, ValidationResult,
    ValidationWarning,
};
