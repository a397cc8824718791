use super::record::ImageRecord;
use crate::constants::{
    OCI_REVISION_LABEL, OCI_SOURCE_LABEL, OCI_VERSION_LABEL, UNKNOWN_LABEL_VALUE,
};
use std::collections::HashMap;

/// Where an image came from, according to its OCI annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub source: String,
    pub revision: String,
    pub version: String,
}

fn label_or(labels: &HashMap<String, String>, key: &str, default: &str) -> String {
    labels
        .get(key)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

pub fn extract_provenance(record: &ImageRecord) -> Provenance {
    Provenance {
        source: label_or(&record.labels, OCI_SOURCE_LABEL, UNKNOWN_LABEL_VALUE),
        revision: label_or(&record.labels, OCI_REVISION_LABEL, UNKNOWN_LABEL_VALUE),
        version: label_or(&record.labels, OCI_VERSION_LABEL, UNKNOWN_LABEL_VALUE),
    }
}
