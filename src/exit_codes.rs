//! Exit code constants for the get-diff CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable event payload)
//! - 2: Configuration error
//! - 3: Reserved for git failures
//! - 4: Output write failure
//!
//! Every git call today goes through the diff pipeline, which degrades
//! failures to an empty result, so no command currently exits with 3.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unreadable event payload.
pub const USER_ERROR: i32 = 1;

/// Configuration error: invalid config file, action input, or pattern.
pub const CONFIG_ERROR: i32 = 2;

/// Reserved: [`GetDiffError::GitError`](crate::error::GetDiffError::GitError)
/// is absorbed by the diff pipeline and does not reach `main`.
pub const GIT_FAILURE: i32 = 3;

/// Output file (`GITHUB_OUTPUT` / `GITHUB_ENV`) could not be written.
pub const OUTPUT_FAILURE: i32 = 4;
