use crate::constants::{SHORT_ID_HEX_LEN, UNTAGGED_PLACEHOLDER};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;

const SHA256_PREFIX: &str = "sha256:";

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ImageId(pub String);

impl ImageId {
    /// Short form used in log lines: `sha256:` plus the first ten hex digits,
    /// or the first ten characters for ids without a digest prefix.
    pub fn short(&self) -> String {
        match self.0.strip_prefix(SHA256_PREFIX) {
            Some(hex) => format!(
                "{}{}",
                SHA256_PREFIX,
                hex.chars().take(SHORT_ID_HEX_LEN).collect::<String>()
            ),
            None => self.0.chars().take(SHORT_ID_HEX_LEN).collect(),
        }
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Snapshot of one image as reported by the runtime when the list was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: ImageId,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub labels: HashMap<String, String>,
}

impl ImageRecord {
    pub fn new(
        id: impl Into<String>,
        tags: Vec<String>,
        created_at: DateTime<Utc>,
        labels: Option<HashMap<String, String>>,
    ) -> Self {
        let tags = tags
            .into_iter()
            .filter(|tag| tag != UNTAGGED_PLACEHOLDER)
            .collect();

        Self {
            id: ImageId(id.into()),
            tags,
            created_at,
            labels: labels.unwrap_or_default(),
        }
    }

    pub fn short_id(&self) -> String {
        self.id.short()
    }
}
