//! Image normalization errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error("The captured image is empty")]
    EmptyImage,

    #[error("The captured image could not be decoded")]
    Decode { reason: String },

    #[error("The image could not be re-encoded")]
    Encode { reason: String },

    #[error("Image processing was interrupted")]
    Interrupted { reason: String },
}

impl NormalizationError {
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::EmptyImage => None,
            Self::Decode { reason } | Self::Encode { reason } | Self::Interrupted { reason } => {
                Some(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = NormalizationError::Decode {
            reason: "unsupported format".to_string(),
        };
        assert_eq!(err.to_string(), "The captured image could not be decoded");
        assert_eq!(err.reason(), Some("unsupported format"));
    }

    #[test]
    fn test_empty_image_has_no_reason() {
        assert!(NormalizationError::EmptyImage.reason().is_none());
    }
}
