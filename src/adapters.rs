//! Terminal-side capability adapters and path helpers.

use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::Engine;

use tracing::info;

use tourguide_protocols::{
    Coordinates, GeolocationError, GeolocationProvider, HistoryRecord, ImageDataUrl, ShareError,
    ShareTarget,
};

/// Get the .tourguide directory path.
pub(crate) fn tourguide_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".tourguide"))
        .unwrap_or_else(|| PathBuf::from(".tourguide"))
}

pub(crate) fn default_config_path() -> PathBuf {
    tourguide_dir().join("config.toml")
}

/// Find a record by id, or by its 1-based position in the newest-first listing.
pub(crate) fn resolve_record<'a>(
    history: &'a [HistoryRecord],
    key: &str,
) -> Option<&'a HistoryRecord> {
    if let Some(record) = history.iter().find(|r| r.id == key) {
        return Some(record);
    }
    let position: usize = key.parse().ok()?;
    if position == 0 || position > history.len() {
        return None;
    }
    history.get(history.len() - position)
}

/// Decode a captured image and write it to `path`. Returns the number of bytes written.
pub(crate) async fn save_image(
    image: &ImageDataUrl,
    path: &Path,
) -> Result<usize, Box<dyn std::error::Error>> {
    let parts = image.parts().ok_or("The stored image is not a base64 data URL")?;
    let bytes = base64::engine::general_purpose::STANDARD.decode(parts.data)?;
    tokio::fs::write(path, &bytes)
        .await
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    info!("Saved {} image ({} bytes) to {}", parts.mime_type, bytes.len(), path.display());
    Ok(bytes.len())
}

/// A position fixed by configuration or the command line.
pub(crate) struct FixedLocation {
    position: Option<Coordinates>,
}

impl FixedLocation {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl GeolocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        self.position.ok_or(GeolocationError::Unsupported)
    }
}

/// Shares to stdout when it is piped; copies through the terminal (OSC 52) otherwise.
pub(crate) struct TerminalShare {
    piped: bool,
}

impl TerminalShare {
    pub fn detect() -> Self {
        Self {
            piped: !std::io::stdout().is_terminal(),
        }
    }
}

fn write_stdout(payload: &str) -> Result<(), ShareError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(payload.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| ShareError::Failed {
            reason: e.to_string(),
        })
}

/// OSC 52 clipboard write sequence.
pub(crate) fn osc52(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", encoded)
}

#[async_trait]
impl ShareTarget for TerminalShare {
    fn can_share(&self) -> bool {
        self.piped
    }

    async fn share(&self, title: &str, text: &str) -> Result<(), ShareError> {
        write_stdout(&format!("{}\n\n{}\n", title, text))
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError> {
        write_stdout(&osc52(text))
    }
}
