use crate::images::{ImageId, ImageRecord};
use crate::runtime::{ImageRuntime, RemovalReport};
use tracing::debug;

#[derive(Debug)]
pub enum RemovalOutcome {
    Removed {
        id: ImageId,
        report: RemovalReport,
    },
    RemovalFailed {
        id: ImageId,
        cause: anyhow::Error,
    },
}

impl RemovalOutcome {
    pub fn id(&self) -> &ImageId {
        match self {
            RemovalOutcome::Removed { id, .. } | RemovalOutcome::RemovalFailed { id, .. } => id,
        }
    }
}

/// Asks the runtime to delete one image. The caller has already decided the
/// image is a candidate; errors are folded into the outcome, never returned.
pub async fn remove<R>(runtime: &R, record: &ImageRecord) -> RemovalOutcome
where
    R: ImageRuntime + ?Sized,
{
    match runtime.remove_image(&record.id).await {
        Ok(report) => {
            for untagged in &report.untagged {
                debug!("Untagged: {}", untagged);
            }
            for deleted in &report.deleted {
                debug!("Deleted: {}", deleted);
            }
            RemovalOutcome::Removed {
                id: record.id.clone(),
                report,
            }
        }
        Err(cause) => RemovalOutcome::RemovalFailed {
            id: record.id.clone(),
            cause,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockImageRuntime;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn untagged(id: &str) -> ImageRecord {
        ImageRecord::new(id, vec![], Utc::now(), None)
    }

    #[tokio::test]
    async fn test_remove_success_carries_report() {
        let mut runtime = MockImageRuntime::new();
        runtime
            .expect_remove_image()
            .with(eq(ImageId("sha256:e5".to_string())))
            .times(1)
            .returning(|_| {
                Ok(RemovalReport {
                    untagged: vec![],
                    deleted: vec!["sha256:e5".to_string()],
                })
            });

        let outcome = remove(&runtime, &untagged("sha256:e5")).await;

        match outcome {
            RemovalOutcome::Removed { id, report } => {
                assert_eq!(id.0, "sha256:e5");
                assert_eq!(report.deleted, vec!["sha256:e5"]);
            }
            other => panic!("expected removal, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_remove_failure_is_contained() {
        let mut runtime = MockImageRuntime::new();
        runtime
            .expect_remove_image()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("image is being used by stopped container")));

        let outcome = remove(&runtime, &untagged("sha256:e5")).await;

        assert_eq!(outcome.id().0, "sha256:e5");
        match outcome {
            RemovalOutcome::RemovalFailed { cause, .. } => {
                assert!(cause.to_string().contains("stopped container"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
