//! Description service errors.

use thiserror::Error;

/// Transport or remote failure talking to the description service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Network connection failed. Please check your internet and try again.")]
    Network { detail: String },

    #[error("The AI service is currently unavailable. Please try again in a moment.")]
    Unavailable { detail: String },

    #[error("The AI service rejected the configured API key. Please check your configuration.")]
    Authentication { detail: String },

    #[error("Invalid image data URL format. Please capture the image again.")]
    InvalidImage,
}

impl ServiceError {
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network {
            detail: detail.into(),
        }
    }

    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self::Unavailable {
            detail: detail.into(),
        }
    }

    /// Classify an HTTP error status returned by the remote endpoint.
    pub fn from_status(status: u16, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        match status {
            401 | 403 => Self::Authentication { detail },
            _ => Self::Unavailable {
                detail: format!("HTTP {}: {}", status, detail),
            },
        }
    }

    /// Technical detail suitable for logs.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Network { detail }
            | Self::Unavailable { detail }
            | Self::Authentication { detail } => Some(detail),
            Self::InvalidImage => None,
        }
    }
}

/// Failure to obtain a description for an image.
#[derive(Debug, Error)]
pub enum DescribeError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The service answered but produced no usable text.
    #[error(
        "The AI guide couldn't identify the item. It might be too obscure or the image is unclear. Please try a different angle or item."
    )]
    NotIdentified,
}
