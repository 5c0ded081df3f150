//! # Tour Guide Core
//!
//! The capture-analyze-history loop of the tour guide:
//!
//! - [`HistoryStore`] - bounded, persisted log of captures
//! - [`machine`] - pure view-state transitions
//! - [`GuideSession`] - effect boundary running the capture pipeline and retries
//! - [`SuggestionsPanel`] - nearby landmark suggestions
//! - [`NarrationController`] - single-utterance playback control
//! - [`share_description`] - share sheet with clipboard fallback
//! - [`format_description`] - parse guide text into display blocks

pub mod constants;
pub mod formatter;
pub mod history;
pub mod machine;
pub mod narration;
pub mod session;
pub mod share;
pub mod suggestions;

pub use constants::*;
pub use formatter::{Block, Inline, format_description, to_plain_text};
pub use history::HistoryStore;
pub use machine::{AppState, Event, View, transition};
pub use narration::{NarrationController, PlaybackState};
pub use session::GuideSession;
pub use share::{ShareOutcome, share_description, share_title};
pub use suggestions::{SuggestionsPanel, SuggestionsState};
