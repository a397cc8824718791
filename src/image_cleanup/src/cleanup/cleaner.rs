use super::executor::{self, RemovalOutcome};
use super::summary::CleanupSummary;
use crate::images::{extract_provenance, is_eligible};
use crate::runtime::ImageRuntime;
use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};

/// Walks one snapshot of the image store and removes every untagged image.
pub struct Cleaner<'a, R: ImageRuntime + ?Sized> {
    runtime: &'a R,
}

impl<'a, R> Cleaner<'a, R>
where
    R: ImageRuntime + ?Sized,
{
    pub fn new(runtime: &'a R) -> Self {
        Self { runtime }
    }

    pub async fn run(&self) -> Result<CleanupSummary> {
        // The whole list is taken before anything is removed.
        let images = self
            .runtime
            .list_images()
            .await
            .context("Unable to read the image list")?;
        debug!("Found {} images", images.len());

        let mut summary = CleanupSummary::default();

        for record in images {
            let short_id = record.short_id();

            if !is_eligible(&record) {
                debug!("Skipping image {}, tagged to {:?}", short_id, record.tags);
                summary.record_skip();
                continue;
            }

            let provenance = extract_provenance(&record);
            info!(
                "Removing image {}, source {} version {} revision {}",
                short_id, provenance.source, provenance.version, provenance.revision
            );

            let outcome = executor::remove(self.runtime, &record).await;
            if let RemovalOutcome::RemovalFailed { cause, .. } = &outcome {
                error!("Unable to remove image {}: {:#}", short_id, cause);
            }
            summary.record_outcome(outcome);
        }

        if !summary.failed.is_empty() {
            warn!(
                "{} of {} removals failed, see the errors above",
                summary.failed.len(),
                summary.attempted()
            );
        }

        info!(
            examined = summary.examined,
            removed = summary.removed.len(),
            failed = summary.failed.len(),
            "Cleanup complete!"
        );

        Ok(summary)
    }
}
