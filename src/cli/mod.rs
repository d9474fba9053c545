//! CLI argument parsing for get-diff.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// get-diff: report the files a pull request or push changed.
///
/// Resolves the compared refs from the CI event, lists the changed files,
/// applies the ignore list and prefix/suffix filters, and publishes the
/// file lists and line counts as step outputs.
#[derive(Parser, Debug)]
#[command(name = "get-diff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for get-diff.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the diff and publish outputs.
    ///
    /// Never fails because of git: fetch, listing, and stat failures
    /// produce an empty report instead.
    Run(RunArgs),

    /// Print the effective configuration as YAML.
    Config(ConfigArgs),
}

/// Configuration sources shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigSource {
    /// YAML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore `INPUT_*` environment variables.
    #[arg(long)]
    pub no_inputs: bool,
}

/// Arguments for the `run` command.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: ConfigSource,

    /// Repository checkout to inspect (default: $GITHUB_WORKSPACE, then the current directory).
    #[arg(long, value_name = "PATH")]
    pub workspace: Option<PathBuf>,

    /// Compare from this ref or commit instead of the event's base.
    #[arg(long, requires = "head")]
    pub base: Option<String>,

    /// Compare to this ref or commit instead of the event's head.
    #[arg(long, requires = "base")]
    pub head: Option<String>,
}

/// Arguments for the `config` command.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub source: ConfigSource,
}
