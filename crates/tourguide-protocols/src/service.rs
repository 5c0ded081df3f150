//! Description service protocol.

use async_trait::async_trait;

use crate::error::{DescribeError, ServiceError};
use crate::types::{Coordinates, ImageDataUrl};

/// Remote capability turning an image or a location into text.
#[async_trait]
pub trait DescriptionService: Send + Sync {
    /// Describe the artwork or monument shown in `image`.
    async fn describe_image(&self, image: &ImageDataUrl) -> Result<String, DescribeError>;

    /// Names of notable places near `position`. Empty when nothing was found.
    async fn nearby_suggestions(&self, position: Coordinates) -> Result<Vec<String>, ServiceError>;
}
