//! Sharing a description.

use tracing::warn;

use tourguide_protocols::{ShareError, ShareTarget};

/// Title used when the description has no title line.
pub const DEFAULT_SHARE_TITLE: &str = "AI Tour Guide Analysis";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the native share facility.
    Shared,
    /// Share unavailable; copied to the clipboard instead.
    Copied,
}

impl ShareOutcome {
    /// Short status line to flash to the user, if any.
    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            ShareOutcome::Shared => None,
            ShareOutcome::Copied => Some("Copied to clipboard!"),
        }
    }
}

/// First line mentioning "title" (case-insensitive), else [`DEFAULT_SHARE_TITLE`].
pub fn share_title(description: &str) -> &str {
    description
        .lines()
        .find(|line| line.to_lowercase().contains("title"))
        .map(str::trim)
        .unwrap_or(DEFAULT_SHARE_TITLE)
}

/// Share `description`, falling back to the clipboard when sharing is unavailable.
pub async fn share_description(
    target: &dyn ShareTarget,
    description: &str,
) -> Result<ShareOutcome, ShareError> {
    let result = if target.can_share() {
        target
            .share(share_title(description), description)
            .await
            .map(|_| ShareOutcome::Shared)
    } else {
        target
            .copy_to_clipboard(description)
            .await
            .map(|_| ShareOutcome::Copied)
    };

    if let Err(ShareError::Failed { reason }) = &result {
        warn!("Share/Copy failed: {}", reason);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    struct FakeTarget {
        native: bool,
        fail: bool,
        shared: Mutex<Vec<(String, String)>>,
        copied: Mutex<Vec<String>>,
    }

    impl FakeTarget {
        fn new(native: bool, fail: bool) -> Self {
            Self {
                native,
                fail,
                shared: Mutex::new(Vec::new()),
                copied: Mutex::new(Vec::new()),
            }
        }

        fn result(&self) -> Result<(), ShareError> {
            if self.fail {
                Err(ShareError::Failed {
                    reason: "denied".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ShareTarget for FakeTarget {
        fn can_share(&self) -> bool {
            self.native
        }

        async fn share(&self, title: &str, text: &str) -> Result<(), ShareError> {
            self.shared.lock().push((title.to_string(), text.to_string()));
            self.result()
        }

        async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError> {
            self.copied.lock().push(text.to_string());
            self.result()
        }
    }

    const DESCRIPTION: &str =
        "**Title of the item**: The Thinker\n**Artist name and background**: Rodin";

    #[test]
    fn test_share_title_finds_title_line() {
        assert_eq!(share_title(DESCRIPTION), "**Title of the item**: The Thinker");
    }

    #[test]
    fn test_share_title_case_insensitive() {
        assert_eq!(share_title("intro\nTITLE: Pieta"), "TITLE: Pieta");
    }

    #[test]
    fn test_share_title_default() {
        assert_eq!(share_title("no heading here"), DEFAULT_SHARE_TITLE);
    }

    #[tokio::test]
    async fn test_native_share() {
        let target = FakeTarget::new(true, false);
        let outcome = share_description(&target, DESCRIPTION).await.unwrap();
        assert_eq!(outcome, ShareOutcome::Shared);
        assert!(outcome.status_message().is_none());
        let shared = target.shared.lock();
        assert_eq!(shared[0].0, "**Title of the item**: The Thinker");
        assert_eq!(shared[0].1, DESCRIPTION);
        assert!(target.copied.lock().is_empty());
    }

    #[tokio::test]
    async fn test_clipboard_fallback() {
        let target = FakeTarget::new(false, false);
        let outcome = share_description(&target, DESCRIPTION).await.unwrap();
        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(outcome.status_message(), Some("Copied to clipboard!"));
        assert_eq!(target.copied.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_reports_error() {
        let target = FakeTarget::new(false, true);
        let err = share_description(&target, DESCRIPTION).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to share.");
    }
}
