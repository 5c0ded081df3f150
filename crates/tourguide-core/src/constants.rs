//! Fixed limits and user-facing strings.

/// Storage key under which the history array is persisted.
pub const STORAGE_KEY: &str = "aiTourGuideHistory";

/// Maximum number of captures kept; older ones are evicted first.
pub const MAX_HISTORY_ITEMS: usize = 100;

/// Status lines shown while a description is being fetched.
pub const LOADING_MESSAGES: [&str; 6] = [
    "Analyzing your image...",
    "Consulting art historians...",
    "Checking historical records...",
    "Uncovering hidden stories...",
    "Connecting to the art world...",
    "Just a moment...",
];

/// Seconds between loading message rotations.
pub const LOADING_MESSAGE_INTERVAL_SECS: u64 = 3;

/// Loading message for the `tick`-th rotation.
pub fn loading_message(tick: usize) -> &'static str {
    LOADING_MESSAGES[tick % LOADING_MESSAGES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_message_cycles() {
        assert_eq!(loading_message(0), "Analyzing your image...");
        assert_eq!(loading_message(5), "Just a moment...");
        assert_eq!(loading_message(6), loading_message(0));
    }
}
