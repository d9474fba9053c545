//! Error types for the get-diff CLI.
//!
//! Uses thiserror for derive macros. Only the glue around the diff pipeline
//! produces these errors; git failures inside the pipeline are swallowed.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for get-diff operations.
#[derive(Error, Debug)]
pub enum GetDiffError {
    /// User provided invalid arguments or the environment is unusable.
    #[error("{0}")]
    UserError(String),

    /// Configuration file, action input, or filter pattern is invalid.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The triggering event could not be read.
    #[error("Failed to read event context: {0}")]
    EventError(String),

    /// Git operation failed. Returned by the `Vcs` layer; the diff
    /// pipeline logs it and carries on with an empty result.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Writing an output or exported variable failed.
    #[error("Failed to write output: {0}")]
    OutputError(String),
}

impl GetDiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GetDiffError::UserError(_) => exit_codes::USER_ERROR,
            GetDiffError::EventError(_) => exit_codes::USER_ERROR,
            GetDiffError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            GetDiffError::GitError(_) => exit_codes::GIT_FAILURE,
            GetDiffError::OutputError(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for get-diff operations.
pub type Result<T> = std::result::Result<T, GetDiffError>;
