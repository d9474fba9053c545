//! Configuration model for get-diff.
//!
//! Configuration is layered, later layers win:
//! 1. Built-in defaults
//! 2. An optional YAML file (`--config <path>`)
//! 3. Action inputs (`INPUT_<NAME>` environment variables)
//!
//! YAML parsing is forward-compatible (unknown fields are ignored) and the
//! merged result is validated once before use.

mod inputs;
mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{EnvNames, OutputDefaults, OutputKey, PatternSyntax};
