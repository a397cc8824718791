pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_DOCKER_TIMEOUT_SECS: u64 = 120;

// Identifier the journal entries are tagged with
pub const SYSLOG_IDENTIFIER: &str = "image_cleanup";

pub const ENV_PREFIX: &str = "IMAGE_CLEANUP";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
// Exported by systemd v232+ to every unit it starts
pub const INVOCATION_ID_ENV: &str = "INVOCATION_ID";

// Placeholder older engines report in place of tags for dangling images
pub const UNTAGGED_PLACEHOLDER: &str = "<none>:<none>";

pub const OCI_SOURCE_LABEL: &str = "org.opencontainers.image.source";
pub const OCI_REVISION_LABEL: &str = "org.opencontainers.image.revision";
pub const OCI_VERSION_LABEL: &str = "org.opencontainers.image.version";
pub const UNKNOWN_LABEL_VALUE: &str = "unknown";

pub const SHORT_ID_HEX_LEN: usize = 10;
