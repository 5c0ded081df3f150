//! View state machine.
//!
//! [`transition`] is pure: it never performs I/O. Side effects (normalization,
//! remote calls, persistence) are run by [`GuideSession`](crate::GuideSession),
//! which feeds their outcomes back in as events.

use tourguide_protocols::{HistoryRecord, ImageDataUrl};

/// What the presentation layer shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Welcome,
    /// Viewfinder open, ready to capture.
    Capture,
    /// A description is being fetched. `image` is set once normalization succeeded.
    Loading { image: Option<ImageDataUrl> },
    Result {
        image: ImageDataUrl,
        description: String,
    },
    Error {
        image: Option<ImageDataUrl>,
        message: String,
    },
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Welcome => "welcome",
            View::Capture => "capture",
            View::Loading { .. } => "loading",
            View::Result { .. } => "result",
            View::Error { .. } => "error",
        }
    }

    /// The image on screen, if any.
    pub fn image(&self) -> Option<&ImageDataUrl> {
        match self {
            View::Loading { image } | View::Error { image, .. } => image.as_ref(),
            View::Result { image, .. } => Some(image),
            View::Welcome | View::Capture => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            View::Result { description, .. } => Some(description),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            View::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, View::Loading { .. })
    }
}

/// Whole application state: the view plus the cached history and sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub view: View,
    /// Read-through copy of the persisted history.
    pub history: Vec<HistoryRecord>,
    pub history_visible: bool,
}

impl AppState {
    pub fn with_history(history: Vec<HistoryRecord>) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    pub fn find_record(&self, id: &str) -> Option<&HistoryRecord> {
        self.history.iter().find(|r| r.id == id)
    }
}

/// Inputs to the state machine: user intents and pipeline outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Leave the welcome screen.
    Start,
    /// The capture pipeline began on a fresh frame.
    CaptureStarted,
    /// Normalization produced the image to display while loading.
    ImageNormalized(ImageDataUrl),
    Described {
        image: ImageDataUrl,
        description: String,
    },
    Failed {
        image: Option<ImageDataUrl>,
        message: String,
    },
    /// Discard the current result or error and reopen the viewfinder.
    Retake,
    SelectHistory(HistoryRecord),
    ShowHistory,
    HideHistory,
    /// The store returned a new snapshot after a mutation.
    HistoryReplaced(Vec<HistoryRecord>),
}

/// Apply `event` to `state`.
///
/// Events that are not valid in the current view leave it unchanged; in
/// particular a capture can only start from [`View::Capture`], so at most one
/// capture is in flight.
pub fn transition(state: AppState, event: Event) -> AppState {
    let AppState {
        view,
        history,
        history_visible,
    } = state;

    match (view, event) {
        (View::Welcome, Event::Start) => AppState {
            view: View::Capture,
            history,
            history_visible,
        },

        (View::Capture, Event::CaptureStarted) => AppState {
            view: View::Loading { image: None },
            history,
            history_visible,
        },

        (View::Loading { .. }, Event::ImageNormalized(image)) => AppState {
            view: View::Loading { image: Some(image) },
            history,
            history_visible,
        },

        (View::Loading { .. }, Event::Described { image, description }) => AppState {
            view: View::Result { image, description },
            history,
            history_visible,
        },

        (View::Loading { .. }, Event::Failed { image, message }) => AppState {
            view: View::Error { image, message },
            history,
            history_visible,
        },

        (View::Result { .. } | View::Error { .. }, Event::Retake) => AppState {
            view: View::Capture,
            history,
            history_visible,
        },

        (_, Event::SelectHistory(record)) => {
            let view = match record.description {
                Some(description) => View::Result {
                    image: record.image_data_url,
                    description,
                },
                None => View::Loading {
                    image: Some(record.image_data_url),
                },
            };
            AppState {
                view,
                history,
                history_visible: false,
            }
        }

        (view, Event::ShowHistory) => AppState {
            view,
            history,
            history_visible: true,
        },

        (view, Event::HideHistory) => AppState {
            view,
            history,
            history_visible: false,
        },

        (view, Event::HistoryReplaced(snapshot)) => AppState {
            view,
            history: snapshot,
            history_visible,
        },

        (view, _) => AppState {
            view,
            history,
            history_visible,
        },
    }
}

#[cfg(test)]
#[path = "machine_tests.rs"]
mod tests;
