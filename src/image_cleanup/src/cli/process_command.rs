use super::commands::Cli;
use crate::cleanup::run_cleanup;
use crate::config::{Config, ConfigLoader};
use crate::logging::setup_logging;
use crate::runtime::DockerRuntime;
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::error;

// clap uses the same code for usage errors
const CONFIG_ERROR_EXIT_CODE: u8 = 2;

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = ConfigLoader::load(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    Ok(config)
}

/// Process the command line and run one cleanup pass.
/// Removal failures are logged but still exit successfully; only an
/// unreachable engine turns into a failing exit code.
pub fn process_command() -> ExitCode {
    // NOTE: this exits on a parsing error
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            return ExitCode::from(CONFIG_ERROR_EXIT_CODE);
        }
    };

    let dispatch = setup_logging(&config);
    // Global so that events from tasks hyper spawns for the connection land here too
    if let Err(e) = tracing::dispatcher::set_global_default(dispatch.clone()) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return ExitCode::FAILURE;
    }
    // bollard and hyper report through `log`
    let _ = tracing_log::LogTracer::init();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to start the async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(run(config))
}

async fn run(config: Config) -> ExitCode {
    match run_cleanup(|| DockerRuntime::connect(&config)).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
