//! Image payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A frame as produced by the capture device, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pub bytes: Vec<u8>,
    /// Mime type reported by the device, if known.
    pub mime_type: Option<String>,
}

impl RawImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Self-contained encoded image: `data:<mime>;base64,<payload>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageDataUrl(String);

/// Borrowed view of a well-formed image data URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUrlParts<'a> {
    pub mime_type: &'a str,
    pub data: &'a str,
}

impl ImageDataUrl {
    /// Build a data URL from a mime type and base64 payload.
    pub fn new(mime_type: &str, base64_data: &str) -> Self {
        Self(format!("data:{};base64,{}", mime_type, base64_data))
    }

    /// Wrap an existing string without validating it.
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into mime type and payload. `None` unless the URL is a base64
    /// `image/*` data URL.
    pub fn parts(&self) -> Option<DataUrlParts<'_>> {
        let rest = self.0.strip_prefix("data:")?;
        let (mime_type, data) = rest.rsplit_once(";base64,")?;
        let subtype = mime_type.strip_prefix("image/")?;
        if subtype.is_empty() {
            return None;
        }
        Some(DataUrlParts { mime_type, data })
    }
}

impl fmt::Display for ImageDataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
