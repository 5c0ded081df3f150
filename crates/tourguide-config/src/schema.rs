//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::loader::ConfigLoader;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub image: ImageConfig,

    #[serde(default)]
    pub narration: NarrationConfig,

    #[serde(default)]
    pub location: LocationConfig,
}

/// Description service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: None,
            connect_timeout_seconds: default_connect_timeout(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl ProviderConfig {
    /// The configured key, else `GEMINI_API_KEY`, else `API_KEY`.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .or_else(|| std::env::var("API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_timeout() -> u64 {
    120
}

/// Local persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding history and logs. `~` is expanded.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(ConfigLoader::expand_path(&self.data_dir))
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_path().join("history")
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_path().join("logs")
    }
}

fn default_data_dir() -> String {
    dirs::home_dir()
        .map(|h| h.join(".tourguide").to_string_lossy().to_string())
        .unwrap_or_else(|| ".tourguide".to_string())
}

/// Capture normalization bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    #[serde(default = "default_max_dimension")]
    pub max_width: u32,

    #[serde(default = "default_max_dimension")]
    pub max_height: u32,

    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_dimension(),
            max_height: default_max_dimension(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

fn default_max_dimension() -> u32 {
    1024
}

fn default_jpeg_quality() -> u8 {
    90
}

/// Speech output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationConfig {
    /// Text-to-speech program; the text is passed as the last argument.
    #[serde(default = "default_narration_command")]
    pub command: String,

    /// Arguments placed before the text. `{amplitude}` (0-200) and
    /// `{volume}` (0.0-1.0) are replaced with the playback volume.
    #[serde(default = "default_narration_args")]
    pub args: Vec<String>,

    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            command: default_narration_command(),
            args: default_narration_args(),
            volume: default_volume(),
        }
    }
}

fn default_narration_command() -> String {
    "espeak".to_string()
}

fn default_narration_args() -> Vec<String> {
    vec!["-a".to_string(), "{amplitude}".to_string()]
}

fn default_volume() -> f32 {
    1.0
}

/// Fixed position used for nearby suggestions when the device has no locator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}
