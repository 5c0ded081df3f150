//! Narration playback control.
//!
//! Wraps a [`NarrationEngine`] and owns the speaking/paused state. The engine
//! is a singleton resource: every fresh `speak` is preceded by `stop`, so two
//! utterances never overlap.

use std::sync::Arc;

use tracing::debug;

use tourguide_protocols::{NarrationEngine, NarrationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Speaking,
    Paused,
}

pub struct NarrationController {
    engine: Arc<dyn NarrationEngine>,
    text: Option<String>,
    playback: PlaybackState,
    volume: f32,
}

/// Clamp to [0, 1], replacing NaN with `fallback`.
fn clamp_volume(volume: f32, fallback: f32) -> f32 {
    if volume.is_nan() {
        fallback
    } else {
        volume.clamp(0.0, 1.0)
    }
}

impl NarrationController {
    pub fn new(engine: Arc<dyn NarrationEngine>, volume: f32) -> Self {
        Self {
            engine,
            text: None,
            playback: PlaybackState::Idle,
            volume: clamp_volume(volume, 1.0),
        }
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_speaking(&self) -> bool {
        self.playback == PlaybackState::Speaking
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace the text to narrate. Any playback of different text is stopped.
    pub fn set_text(&mut self, text: Option<String>) {
        if self.text == text {
            return;
        }
        self.stop();
        self.text = text;
    }

    /// Resume if paused, otherwise narrate the current text from the start.
    pub fn play(&mut self) -> Result<(), NarrationError> {
        let Some(text) = self.text.as_deref() else {
            return Ok(());
        };

        if self.playback == PlaybackState::Paused {
            self.engine.resume()?;
        } else {
            self.engine.stop();
            self.engine.speak(text, self.volume)?;
            debug!("Narration started ({} chars)", text.len());
        }
        self.playback = PlaybackState::Speaking;
        Ok(())
    }

    /// Pause the active utterance. No effect unless speaking.
    pub fn pause(&mut self) -> Result<(), NarrationError> {
        if self.playback != PlaybackState::Speaking {
            return Ok(());
        }
        self.engine.pause()?;
        self.playback = PlaybackState::Paused;
        Ok(())
    }

    pub fn stop(&mut self) {
        self.engine.stop();
        self.playback = PlaybackState::Idle;
    }

    /// Set the volume, clamped to [0, 1]. Applies immediately to active playback.
    ///
    /// NaN is ignored and the current volume kept.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume, self.volume);
        if self.playback != PlaybackState::Idle {
            self.engine.set_volume(self.volume);
        }
    }

    /// Check whether the utterance ended on its own and update state.
    pub fn poll(&mut self) -> PlaybackState {
        if self.playback == PlaybackState::Speaking && self.engine.poll_ended() {
            debug!("Narration ended");
            self.playback = PlaybackState::Idle;
        }
        self.playback
    }
}

#[cfg(test)]
#[path = "narration_tests.rs"]
mod tests;
