//! Command implementations for get-diff.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the configuration loading they share.

mod config;
mod run;

use crate::cli::{Command, ConfigSource};
use crate::config::Config;
use crate::error::Result;
use tracing::debug;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run::cmd_run(args),
        Command::Config(args) => config::cmd_config(args),
    }
}

/// Build the effective configuration: defaults, then the YAML file, then
/// action inputs from the environment. The result is validated.
fn load_config(source: &ConfigSource) -> Result<Config> {
    load_config_with(source, |key| std::env::var(key).ok())
}

fn load_config_with(
    source: &ConfigSource,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config> {
    let mut config = match &source.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config file");
            Config::load(path)?
        }
        None => Config::default(),
    };

    if !source.no_inputs {
        config.apply_inputs(lookup)?;
    }

    config.validate()?;
    Ok(config)
}
