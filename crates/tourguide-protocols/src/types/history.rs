//! Capture history records.

use serde::{Deserialize, Serialize};

use super::ImageDataUrl;

/// One persisted capture.
///
/// `description` is `None` while the capture is pending: the image was saved but
/// no description has been obtained for it yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: String,
    pub image_data_url: ImageDataUrl,
    pub description: Option<String>,
}

impl HistoryRecord {
    /// Whether the record still waits for a description.
    pub fn is_pending(&self) -> bool {
        self.description.is_none()
    }
}

/// A record as supplied by the caller; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryRecord {
    pub image_data_url: ImageDataUrl,
    pub description: Option<String>,
}

impl NewHistoryRecord {
    pub fn described(image_data_url: ImageDataUrl, description: impl Into<String>) -> Self {
        Self {
            image_data_url,
            description: Some(description.into()),
        }
    }

    pub fn pending(image_data_url: ImageDataUrl) -> Self {
        Self {
            image_data_url,
            description: None,
        }
    }

    /// Attach an id, producing the persisted form.
    pub fn with_id(self, id: impl Into<String>) -> HistoryRecord {
        HistoryRecord {
            id: id.into(),
            image_data_url: self.image_data_url,
            description: self.description,
        }
    }
}
