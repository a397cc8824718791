mod docker;

pub use docker::DockerRuntime;

use crate::images::{ImageId, ImageRecord};
use anyhow::Result;

/// What the engine reports back after deleting an image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalReport {
    pub untagged: Vec<String>,
    pub deleted: Vec<String>,
}

/// The slice of a container engine's image API the cleanup needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ImageRuntime: Send + Sync {
    /// Returns every top-level image the engine currently holds, tagged or not.
    async fn list_images(&self) -> Result<Vec<ImageRecord>>;

    async fn remove_image(&self, id: &ImageId) -> Result<RemovalReport>;
}
