//! Helpers for tests that drive a real Docker daemon.

use bollard::container::{Config, CreateContainerOptions, RemoveContainerOptions};
use bollard::image::{CommitContainerOptions, CreateImageOptions, ListImagesOptions};
use bollard::Docker;
use futures_util::TryStreamExt;
use std::collections::HashSet;

pub const BASE_IMAGE: &str = "busybox:latest";

pub async fn image_ids(docker: &Docker) -> HashSet<String> {
    docker
        .list_images(Some(ListImagesOptions::<String>::default()))
        .await
        .expect("Failed to list images")
        .into_iter()
        .map(|image| image.id)
        .collect()
}

pub async fn image_tags(docker: &Docker) -> HashSet<String> {
    docker
        .list_images(Some(ListImagesOptions::<String>::default()))
        .await
        .expect("Failed to list images")
        .into_iter()
        .flat_map(|image| image.repo_tags)
        .collect()
}

pub async fn pull_base_image(docker: &Docker) {
    let options = CreateImageOptions {
        from_image: "busybox",
        tag: "latest",
        ..Default::default()
    };

    docker
        .create_image(Some(options), None, None)
        .try_collect::<Vec<_>>()
        .await
        .expect("Failed to pull base image");
}

/// Commits a stopped container without repo or tag, which leaves an image
/// nothing refers to. Returns its id.
pub async fn create_untagged_image(docker: &Docker) -> String {
    let before = image_ids(docker).await;

    let container = docker
        .create_container(
            None::<CreateContainerOptions<String>>,
            Config {
                image: Some(BASE_IMAGE),
                cmd: Some(vec!["true"]),
                labels: Some(
                    [("org.opencontainers.image.source", "image-cleanup-integration")]
                        .into_iter()
                        .collect(),
                ),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create container");

    docker
        .commit_container(
            CommitContainerOptions {
                container: container.id.as_str(),
                ..Default::default()
            },
            Config::<String>::default(),
        )
        .await
        .expect("Failed to commit container");

    docker
        .remove_container(
            &container.id,
            Some(RemoveContainerOptions {
                force: true,
                ..Default::default()
            }),
        )
        .await
        .expect("Failed to remove container");

    let after = image_ids(docker).await;
    after
        .difference(&before)
        .next()
        .cloned()
        .expect("Commit did not produce a new image")
}
