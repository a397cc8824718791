use anyhow::{anyhow, Result};
use chrono::{TimeZone, Utc};
use image_cleanup::images::{ImageId, ImageRecord};
use image_cleanup::runtime::{ImageRuntime, RemovalReport};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// In-memory image store. Successful removals take the image out of the
/// store, so a second pass sees what the engine would.
#[derive(Default)]
pub struct FakeRuntime {
    images: Mutex<Vec<ImageRecord>>,
    refuse: HashSet<String>,
    pub remove_calls: Mutex<Vec<String>>,
}

impl FakeRuntime {
    pub fn new(images: Vec<ImageRecord>) -> Self {
        Self {
            images: Mutex::new(images),
            ..Default::default()
        }
    }

    pub fn refusing(mut self, id: &str) -> Self {
        self.refuse.insert(id.to_string());
        self
    }

    pub fn push(&self, image: ImageRecord) {
        self.images.lock().unwrap().push(image);
    }

    pub fn remaining_ids(&self) -> Vec<String> {
        self.images
            .lock()
            .unwrap()
            .iter()
            .map(|image| image.id.0.clone())
            .collect()
    }

    pub fn removals_attempted(&self) -> Vec<String> {
        self.remove_calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ImageRuntime for FakeRuntime {
    async fn list_images(&self) -> Result<Vec<ImageRecord>> {
        Ok(self.images.lock().unwrap().clone())
    }

    async fn remove_image(&self, id: &ImageId) -> Result<RemovalReport> {
        self.remove_calls.lock().unwrap().push(id.0.clone());

        if self.refuse.contains(&id.0) {
            return Err(anyhow!(
                "Error response from daemon: conflict: unable to delete {} (must be forced)",
                id.0
            ));
        }

        let mut images = self.images.lock().unwrap();
        images.retain(|image| image.id != *id);
        Ok(RemovalReport {
            untagged: vec![],
            deleted: vec![id.0.clone()],
        })
    }
}

pub fn image(id: &str, tags: &[&str], labels: &[(&str, &str)]) -> ImageRecord {
    ImageRecord::new(
        id,
        tags.iter().map(|t| t.to_string()).collect(),
        Utc.timestamp_opt(1_714_000_000, 0).unwrap(),
        Some(
            labels
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        ),
    )
}
