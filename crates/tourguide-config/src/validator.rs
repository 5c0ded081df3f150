//! Configuration validation.

use std::ops::RangeInclusive;

use crate::schema::Config;

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_provider(config, &mut result);
        Self::validate_image(config, &mut result);
        Self::validate_narration(config, &mut result);
        Self::validate_location(config, &mut result);

        result
    }

    fn validate_provider(config: &Config, result: &mut ValidationResult) {
        let provider = &config.provider;

        if provider.model.trim().is_empty() {
            result.add_error(ValidationError::new("provider.model", "Model cannot be empty"));
        }

        if provider.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "provider.timeout_seconds",
                "Timeout must be greater than 0",
            ));
        }

        if let Some(url) = &provider.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                result.add_error(ValidationError::new(
                    "provider.base_url",
                    format!("Base URL must be http(s): {}", url),
                ));
            }
        }

        if provider.api_key.is_none() {
            result.add_warning(ValidationWarning::new(
                "provider.api_key",
                "No API key in config; GEMINI_API_KEY will be used",
            ));
        }
    }

    fn validate_image(config: &Config, result: &mut ValidationResult) {
        let image = &config.image;

        if image.max_width == 0 || image.max_height == 0 {
            result.add_error(ValidationError::new(
                "image",
                "max_width and max_height must be greater than 0",
            ));
        }

        if !(1..=100).contains(&image.jpeg_quality) {
            result.add_error(ValidationError::new(
                "image.jpeg_quality",
                "JPEG quality must be between 1 and 100",
            ));
        }

        if image.max_width > 4096 || image.max_height > 4096 {
            result.add_warning(ValidationWarning::new(
                "image",
                "Large bounds produce large history payloads",
            ));
        }
    }

    fn validate_narration(config: &Config, result: &mut ValidationResult) {
        let narration = &config.narration;

        if narration.command.trim().is_empty() {
            result.add_error(ValidationError::new(
                "narration.command",
                "Narration command cannot be empty",
            ));
        }

        if !(0.0..=1.0).contains(&narration.volume) {
            result.add_error(ValidationError::new(
                "narration.volume",
                "Volume must be between 0.0 and 1.0",
            ));
        }
    }

    fn validate_location(config: &Config, result: &mut ValidationResult) {
        let location = &config.location;

        match (location.latitude, location.longitude) {
            (Some(lat), Some(lon)) => {
                if !LATITUDE_RANGE.contains(&lat) {
                    result.add_error(ValidationError::new(
                        "location.latitude",
                        "Latitude must be between -90 and 90",
                    ));
                }
                if !LONGITUDE_RANGE.contains(&lon) {
                    result.add_error(ValidationError::new(
                        "location.longitude",
                        "Longitude must be between -180 and 180",
                    ));
                }
            }
            (None, None) => {}
            _ => result.add_error(ValidationError::new(
                "location",
                "latitude and longitude must be set together",
            )),
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
