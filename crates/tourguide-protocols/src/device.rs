//! Device capability protocols: location, speech and sharing.

use async_trait::async_trait;

use crate::error::{GeolocationError, NarrationError, ShareError};
use crate::types::Coordinates;

/// Current device position.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// Speech output with at most one active utterance.
///
/// Implementations are driven by `NarrationController` in the core crate,
/// which guarantees `stop` is called before every new `speak`.
pub trait NarrationEngine: Send + Sync {
    /// Start speaking `text` at `volume` (0.0 - 1.0).
    fn speak(&self, text: &str, volume: f32) -> Result<(), NarrationError>;

    fn pause(&self) -> Result<(), NarrationError>;

    fn resume(&self) -> Result<(), NarrationError>;

    /// Stop the active utterance, if any. Safe to call when idle.
    fn stop(&self);

    /// Change the volume of the active utterance.
    fn set_volume(&self, volume: f32);

    /// Returns `true` once the active utterance has finished on its own.
    fn poll_ended(&self) -> bool;
}

/// System share sheet with a clipboard fallback.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    /// Whether a native share facility is available.
    fn can_share(&self) -> bool;

    async fn share(&self, title: &str, text: &str) -> Result<(), ShareError>;

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError>;
}
