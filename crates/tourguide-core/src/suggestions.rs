//! Nearby landmark suggestions.
//!
//! Independent of the capture pipeline: it has its own loading and error
//! state and never touches history.

use std::sync::Arc;

use tracing::{debug, warn};

use tourguide_protocols::{DescriptionService, GeolocationProvider};

/// Shown when the service call fails, whatever the cause.
pub const SUGGESTIONS_FAILED_MESSAGE: &str = "Failed to get nearby suggestions from the AI service.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionsState {
    pub open: bool,
    pub loading: bool,
    pub suggestions: Vec<String>,
    pub error: Option<String>,
}

impl SuggestionsState {
    /// Finished without error and without results.
    pub fn is_empty_result(&self) -> bool {
        self.open && !self.loading && self.error.is_none() && self.suggestions.is_empty()
    }
}

pub struct SuggestionsPanel {
    state: SuggestionsState,
    locator: Arc<dyn GeolocationProvider>,
    service: Arc<dyn DescriptionService>,
}

impl SuggestionsPanel {
    pub fn new(locator: Arc<dyn GeolocationProvider>, service: Arc<dyn DescriptionService>) -> Self {
        Self {
            state: SuggestionsState::default(),
            locator,
            service,
        }
    }

    pub fn state(&self) -> &SuggestionsState {
        &self.state
    }

    /// Open the panel and fetch suggestions for the current position.
    pub async fn open(&mut self) -> &SuggestionsState {
        self.state = SuggestionsState {
            open: true,
            loading: true,
            suggestions: Vec::new(),
            error: None,
        };

        let position = match self.locator.current_position().await {
            Ok(position) => position,
            Err(e) => {
                warn!("Geolocation failed: {:?}", e);
                self.state.error = Some(e.to_string());
                self.state.loading = false;
                return &self.state;
            }
        };

        debug!(
            "Fetching suggestions near {:.4}, {:.4}",
            position.latitude, position.longitude
        );
        match self.service.nearby_suggestions(position).await {
            Ok(suggestions) => self.state.suggestions = suggestions,
            Err(e) => {
                warn!(
                    "Suggestions request failed: {}",
                    e.detail().unwrap_or("no detail")
                );
                self.state.error = Some(SUGGESTIONS_FAILED_MESSAGE.to_string());
            }
        }
        self.state.loading = false;
        &self.state
    }

    pub fn close(&mut self) {
        self.state.open = false;
    }
}
