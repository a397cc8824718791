use super::executor::RemovalOutcome;
use crate::images::ImageId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRemoval {
    pub id: ImageId,
    pub cause: String,
}

/// Tally of one cleanup pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    pub examined: usize,
    pub skipped: usize,
    pub removed: Vec<ImageId>,
    pub failed: Vec<FailedRemoval>,
}

impl CleanupSummary {
    pub fn record_skip(&mut self) {
        self.examined += 1;
        self.skipped += 1;
    }

    pub fn record_outcome(&mut self, outcome: RemovalOutcome) {
        self.examined += 1;
        match outcome {
            RemovalOutcome::Removed { id, .. } => self.removed.push(id),
            RemovalOutcome::RemovalFailed { id, cause } => self.failed.push(FailedRemoval {
                id,
                cause: format!("{:#}", cause),
            }),
        }
    }

    pub fn attempted(&self) -> usize {
        self.removed.len() + self.failed.len()
    }
}
