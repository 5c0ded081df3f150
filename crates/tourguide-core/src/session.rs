//! Capture pipeline and history replay.
//!
//! `GuideSession` is the effect boundary around [`transition`]: it runs
//! normalization, the description call and history writes, and turns their
//! outcomes into events. Methods take `&mut self`, so one capture or retry is
//! in flight at a time. State is only updated after each await completes;
//! dropping an in-flight call discards its result.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use tourguide_protocols::{
    CaptureDevice, CaptureError, DescribeError, DescriptionService, ImageDataUrl,
    ImageNormalizer, NewHistoryRecord, NormalizationError, RawImage,
};

use crate::history::HistoryStore;
use crate::machine::{AppState, Event, View, transition};

pub struct GuideSession {
    state: AppState,
    store: Arc<HistoryStore>,
    normalizer: Arc<dyn ImageNormalizer>,
    service: Arc<dyn DescriptionService>,
}

impl GuideSession {
    /// Open a session on the welcome view with history loaded from the store.
    pub async fn open(
        store: Arc<HistoryStore>,
        normalizer: Arc<dyn ImageNormalizer>,
        service: Arc<dyn DescriptionService>,
    ) -> Self {
        let history = store.load().await;
        info!("Session opened with {} history record(s)", history.len());
        Self {
            state: AppState::with_history(history),
            store,
            normalizer,
            service,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn dispatch(&mut self, event: Event) {
        let before = self.state.view.name();
        let state = std::mem::take(&mut self.state);
        self.state = transition(state, event);
        let after = self.state.view.name();
        if before != after {
            debug!("View {} -> {}", before, after);
        }
    }

    pub fn start(&mut self) -> &AppState {
        self.dispatch(Event::Start);
        &self.state
    }

    pub fn show_history(&mut self) -> &AppState {
        self.dispatch(Event::ShowHistory);
        &self.state
    }

    pub fn hide_history(&mut self) -> &AppState {
        self.dispatch(Event::HideHistory);
        &self.state
    }

    pub fn retake(&mut self) -> &AppState {
        self.dispatch(Event::Retake);
        &self.state
    }

    /// Grab a frame from `device` and run the capture pipeline on it.
    ///
    /// A device failure leaves the viewfinder open and is returned to the caller.
    pub async fn capture_from(
        &mut self,
        device: &dyn CaptureDevice,
    ) -> Result<&AppState, CaptureError> {
        if !matches!(self.state.view, View::Capture) {
            warn!("Ignoring capture request in {} view", self.state.view.name());
            return Ok(&self.state);
        }
        let raw = device.capture_frame().await?;
        Ok(self.capture(raw).await)
    }

    /// Normalize `raw`, describe it and record the outcome in history.
    ///
    /// Only valid in the capture view; otherwise the request is ignored.
    pub async fn capture(&mut self, raw: RawImage) -> &AppState {
        if !matches!(self.state.view, View::Capture) {
            warn!("Ignoring capture request in {} view", self.state.view.name());
            return &self.state;
        }
        self.dispatch(Event::CaptureStarted);

        let image = match self.normalizer.normalize(raw).await {
            Ok(image) => image,
            Err(e) => {
                error!(
                    "Image normalization failed: {} ({})",
                    e,
                    e.reason().unwrap_or("no detail")
                );
                self.dispatch(Event::Failed {
                    image: None,
                    message: normalization_failure_message(&e),
                });
                return &self.state;
            }
        };
        self.dispatch(Event::ImageNormalized(image.clone()));

        match self.service.describe_image(&image).await {
            Ok(description) => {
                let history = self
                    .store
                    .append(NewHistoryRecord::described(image.clone(), description.clone()))
                    .await;
                self.dispatch(Event::HistoryReplaced(history));
                self.dispatch(Event::Described { image, description });
            }
            Err(e) => {
                log_describe_error(&e);
                let history = self
                    .store
                    .append(NewHistoryRecord::pending(image.clone()))
                    .await;
                self.dispatch(Event::HistoryReplaced(history));
                self.dispatch(Event::Failed {
                    image: Some(image),
                    message: capture_failure_message(&e),
                });
            }
        }

        &self.state
    }

    /// Open a history record. Described records are shown as stored; pending
    /// ones are sent to the description service again.
    ///
    /// The sidebar is closed in every case. A failed retry leaves the record
    /// pending in storage.
    pub async fn select_history(&mut self, id: &str) -> &AppState {
        let Some(record) = self.state.find_record(id).cloned() else {
            warn!("History record {} not found", id);
            self.dispatch(Event::HideHistory);
            return &self.state;
        };

        let retry_image: Option<ImageDataUrl> = record
            .is_pending()
            .then(|| record.image_data_url.clone());
        self.dispatch(Event::SelectHistory(record));

        let Some(image) = retry_image else {
            return &self.state;
        };

        info!("Retrying description for history record {}", id);
        match self.service.describe_image(&image).await {
            Ok(description) => {
                let history = self.store.update_description(id, description.clone()).await;
                self.dispatch(Event::HistoryReplaced(history));
                self.dispatch(Event::Described { image, description });
            }
            Err(e) => {
                log_describe_error(&e);
                self.dispatch(Event::Failed {
                    image: Some(image),
                    message: retry_failure_message(&e),
                });
            }
        }

        &self.state
    }
}

fn log_describe_error(err: &DescribeError) {
    match err {
        DescribeError::Service(e) => {
            error!("Description service failed: {}", e.detail().unwrap_or("no detail"))
        }
        DescribeError::NotIdentified => warn!("Description service could not identify the item"),
    }
}

fn sentence(err: &impl std::fmt::Display) -> String {
    err.to_string().trim_end_matches('.').to_string()
}

/// Message after a capture whose image was saved as a pending record.
pub fn capture_failure_message(err: &DescribeError) -> String {
    format!(
        "Failed to analyze the image. {}. The photo has been saved to your history. You can try analyzing it again from there.",
        sentence(err)
    )
}

/// Message after normalization failed; nothing was saved.
pub fn normalization_failure_message(err: &NormalizationError) -> String {
    format!(
        "Failed to process the captured image. {}. Please try again.",
        sentence(err)
    )
}

/// Message after retrying a pending record failed.
pub fn retry_failure_message(err: &DescribeError) -> String {
    format!("Failed to analyze the image. {}.", sentence(err))
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
