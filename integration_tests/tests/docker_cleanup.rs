use bollard::Docker;
use image_cleanup::cleanup::Cleaner;
use image_cleanup::config::ConfigLoader;
use image_cleanup::runtime::DockerRuntime;
use integration_tests as common;

// Removes every untagged image on the host, not only the one created here.
#[tokio::test]
#[ignore = "requires a Docker daemon and removes untagged images on the host"]
async fn test_untagged_image_is_removed_and_tagged_kept() {
    let docker = Docker::connect_with_local_defaults().expect("Failed to connect to Docker");

    common::pull_base_image(&docker).await;
    let untagged = common::create_untagged_image(&docker).await;

    let config = ConfigLoader::load(None).unwrap();
    let runtime = DockerRuntime::connect(&config)
        .await
        .expect("Failed to connect to Docker");
    let summary = Cleaner::new(&runtime).run().await.unwrap();

    assert!(summary.removed.iter().any(|id| id.0 == untagged));
    assert!(!common::image_ids(&docker).await.contains(&untagged));
    assert!(common::image_tags(&docker).await.contains(common::BASE_IMAGE));
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_second_pass_is_a_no_op() {
    let config = ConfigLoader::load(None).unwrap();
    let runtime = DockerRuntime::connect(&config)
        .await
        .expect("Failed to connect to Docker");

    let first = Cleaner::new(&runtime).run().await.unwrap();
    let second = Cleaner::new(&runtime).run().await.unwrap();

    // whatever failed the first time fails again, nothing else is attempted
    assert!(second.removed.is_empty());
    assert_eq!(second.failed.len(), first.failed.len());
}
