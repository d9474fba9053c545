//! `get-diff config`: print the effective configuration.

use super::load_config;
use crate::cli::ConfigArgs;
use crate::error::Result;

pub fn cmd_config(args: ConfigArgs) -> Result<()> {
    let config = load_config(&args.source)?;
    print!("{}", config.to_yaml()?);
    Ok(())
}
