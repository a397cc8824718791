use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::constants::{
    DEFAULT_DOCKER_TIMEOUT_SECS, DEFAULT_LOG_LEVEL, ENV_PREFIX, INVOCATION_ID_ENV, LOG_LEVEL_ENV,
};
use config::{Config as RConfig, Environment, File, FileFormat};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub log_level: String,
    /// Forces the journal sink on or off. When unset, the journal is used
    /// only when running under systemd.
    pub journald: Option<bool>,
    pub invocation_id: Option<String>,

    pub docker_host: Option<String>,
    pub docker_timeout_secs: u64,
}

impl Config {
    pub fn use_journald(&self) -> bool {
        self.journald.unwrap_or(self.invocation_id.is_some())
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the optional TOML file, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        Self::load_with_env(path, None)
    }

    /// Same as [`ConfigLoader::load`], reading variables from `env` instead of
    /// the process environment when it is given.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Config> {
        let lookup = |key: &str| match &env {
            Some(vars) => vars.get(key).cloned(),
            None => std::env::var(key).ok(),
        };

        let mut builder = RConfig::builder()
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("docker_timeout_secs", DEFAULT_DOCKER_TIMEOUT_SECS)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        // LOG_LEVEL and INVOCATION_ID are not ours, they come unprefixed
        builder = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env.clone()),
            )
            .set_override_option("log_level", lookup(LOG_LEVEL_ENV))?
            .set_override_option("invocation_id", lookup(INVOCATION_ID_ENV))?;

        builder
            .build()?
            .try_deserialize()
            .context("failed to parse configuration")
    }
}
