use clap::Parser;
use std::path::PathBuf;

fn footer_message() -> String {
    "Environment:\n  LOG_LEVEL        log threshold (debug, info, warning, error)\n  INVOCATION_ID    set by systemd, switches logging to the journal\n  IMAGE_CLEANUP_*  overrides any setting of the configuration file\n".to_string()
}

/// Removes container images that are no longer referenced by any tag.
#[derive(Parser, Clone, Debug)]
#[clap(name = "image_cleanup", version, after_help = footer_message())]
pub struct Cli {
    /// Optional TOML file with settings
    #[clap(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Overrides LOG_LEVEL
    #[clap(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
