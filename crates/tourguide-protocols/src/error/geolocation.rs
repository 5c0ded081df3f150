//! Geolocation errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error(
        "You denied the request for Geolocation. Please enable location permissions in your settings."
    )]
    PermissionDenied,

    #[error("Location information is unavailable.")]
    Unavailable,

    #[error("The request to get user location timed out.")]
    Timeout,

    #[error("Geolocation is not supported on this device.")]
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_readable() {
        assert!(GeolocationError::PermissionDenied.to_string().contains("denied"));
        assert_eq!(
            GeolocationError::Unavailable.to_string(),
            "Location information is unavailable."
        );
        assert!(GeolocationError::Timeout.to_string().contains("timed out"));
        assert!(GeolocationError::Unsupported.to_string().contains("not supported"));
    }
}
