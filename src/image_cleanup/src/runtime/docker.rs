use super::{ImageRuntime, RemovalReport};
use crate::config::Config;
use crate::images::{ImageId, ImageRecord};
use anyhow::{Context, Result};
use bollard::image::{ListImagesOptions, RemoveImageOptions};
use bollard::models::{ImageDeleteResponseItem, ImageSummary};
use bollard::{Docker, API_DEFAULT_VERSION};
use chrono::DateTime;
use std::time::Duration;

pub struct DockerRuntime {
    docker: Docker,
}

impl DockerRuntime {
    /// Opens a session to the engine and checks that it answers.
    pub async fn connect(config: &Config) -> Result<Self> {
        let docker = match config.docker_host.as_deref() {
            Some(host) => connect_to_host(host, config.docker_timeout_secs)?,
            None => Docker::connect_with_local_defaults()
                .context("Failed to set up the local Docker connection")?
                .with_timeout(Duration::from_secs(config.docker_timeout_secs)),
        };

        let version = docker
            .ping()
            .await
            .context("Docker daemon did not answer the ping")?;
        tracing::debug!("Connected to Docker daemon, ping replied {}", version);

        Ok(Self { docker })
    }
}

fn connect_to_host(host: &str, timeout_secs: u64) -> Result<Docker> {
    let docker = if host.starts_with("tcp://") || host.starts_with("http://") {
        Docker::connect_with_http(host, timeout_secs, API_DEFAULT_VERSION)
    } else {
        Docker::connect_with_socket(host, timeout_secs, API_DEFAULT_VERSION)
    };

    docker.with_context(|| format!("Failed to set up the Docker connection to {}", host))
}

#[async_trait::async_trait]
impl ImageRuntime for DockerRuntime {
    async fn list_images(&self) -> Result<Vec<ImageRecord>> {
        // Intermediate layers are left to the engine; they go away with their child.
        let options = ListImagesOptions::<String> {
            all: false,
            ..Default::default()
        };

        let images = self
            .docker
            .list_images(Some(options))
            .await
            .context("Failed to list images")?;

        Ok(images.into_iter().map(image_record).collect())
    }

    async fn remove_image(&self, id: &ImageId) -> Result<RemovalReport> {
        let options = RemoveImageOptions {
            force: false,
            noprune: false,
        };

        let items = self
            .docker
            .remove_image(&id.0, Some(options), None)
            .await
            .with_context(|| format!("Docker refused to remove image {}", id.short()))?;

        Ok(removal_report(items))
    }
}

fn image_record(summary: ImageSummary) -> ImageRecord {
    ImageRecord::new(
        summary.id,
        summary.repo_tags,
        DateTime::from_timestamp(summary.created, 0).unwrap_or_default(),
        Some(summary.labels),
    )
}

fn removal_report(items: Vec<ImageDeleteResponseItem>) -> RemovalReport {
    items
        .into_iter()
        .fold(RemovalReport::default(), |mut report, item| {
            if let Some(untagged) = item.untagged {
                report.untagged.push(untagged);
            }
            if let Some(deleted) = item.deleted {
                report.deleted.push(deleted);
            }
            report
        })
}
