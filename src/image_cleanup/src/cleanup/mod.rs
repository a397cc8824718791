mod cleaner;
mod executor;
mod summary;

pub use cleaner::Cleaner;
pub use executor::{remove, RemovalOutcome};
pub use summary::{CleanupSummary, FailedRemoval};

use crate::runtime::ImageRuntime;
use anyhow::{Context, Result};
use std::future::Future;

/// Connects through `connect` and runs a single cleanup pass. A connection
/// failure is the only error that stops the run before any image is looked at.
pub async fn run_cleanup<R, F, Fut>(connect: F) -> Result<CleanupSummary>
where
    R: ImageRuntime,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<R>>,
{
    let runtime = connect()
        .await
        .context("Unable to connect to the Docker daemon")?;

    Cleaner::new(&runtime).run().await
}
