//! Wiring configured capabilities into the core.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use tourguide_config::{Config, ConfigLoader, ConfigValidator};
use tourguide_core::HistoryStore;
use tourguide_image::JpegNormalizer;
use tourguide_narration::ProcessNarrator;
use tourguide_protocols::Coordinates;
use tourguide_provider_gemini::GeminiDescriber;
use tourguide_storage::FileStorage;

use crate::adapters::{FixedLocation, default_config_path};

/// Load the configuration file, or defaults when none exists.
pub(crate) fn load_config(
    path: Option<&std::path::Path>,
) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::load_or_default(&default_config_path())?,
    };
    Ok(config)
}

/// Log validation warnings and reject invalid configuration.
pub(crate) fn validate_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let validation = ConfigValidator::validate(config);
    for warning in &validation.warnings {
        warn!("Config warning at {}: {}", warning.path, warning.message);
    }
    if !validation.is_valid() {
        let details: Vec<String> = validation
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect();
        return Err(format!("Invalid configuration: {}", details.join("; ")).into());
    }
    Ok(())
}

pub(crate) async fn open_history(
    config: &Config,
) -> Result<Arc<HistoryStore>, Box<dyn std::error::Error>> {
    let storage = FileStorage::new(config.storage.history_path()).await?;
    info!("History storage at {:?}", storage.dir());
    Ok(Arc::new(HistoryStore::new(Arc::new(storage))))
}

pub(crate) fn normalizer(config: &Config) -> Arc<JpegNormalizer> {
    Arc::new(JpegNormalizer::new(
        config.image.max_width,
        config.image.max_height,
        config.image.jpeg_quality,
    ))
}

pub(crate) fn describer(config: &Config) -> Result<Arc<GeminiDescriber>, Box<dyn std::error::Error>> {
    let provider = &config.provider;
    let describer = GeminiDescriber::connect(
        provider.resolve_api_key()?,
        provider.model.clone(),
        provider.base_url.clone(),
        Duration::from_secs(provider.connect_timeout_seconds),
        Duration::from_secs(provider.timeout_seconds),
    )?;
    info!("Using Gemini model {}", describer.model());
    Ok(Arc::new(describer))
}

pub(crate) fn narrator(config: &Config) -> Arc<ProcessNarrator> {
    Arc::new(ProcessNarrator::new(
        config.narration.command.clone(),
        config.narration.args.clone(),
    ))
}

/// Locator from an explicit position, else the configured one.
pub(crate) fn locator(config: &Config, explicit: Option<Coordinates>) -> Arc<FixedLocation> {
    let configured = match (config.location.latitude, config.location.longitude) {
        (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
        _ => None,
    };
    Arc::new(FixedLocation::new(explicit.or(configured)))
}
