//! Workspace resolution for get-diff.
//!
//! The workspace is the root of the repository checkout the CI job prepared.
//! It is taken from, in order:
//! 1. An explicit `--workspace` argument
//! 2. The `GITHUB_WORKSPACE` environment variable
//! 3. The current working directory

use crate::error::{GetDiffError, Result};
use std::path::{Path, PathBuf};

/// Resolve the workspace root.
///
/// # Arguments
///
/// * `explicit` - A workspace given on the command line
/// * `lookup` - Environment lookup (normally `std::env::var`)
pub fn resolve_workspace(
    explicit: Option<PathBuf>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    if let Some(path) = lookup("GITHUB_WORKSPACE").filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    std::env::current_dir().map_err(|e| {
        GetDiffError::UserError(format!("failed to determine current directory: {}", e))
    })
}

/// Returns true if `workspace` holds a git checkout.
///
/// Only the presence of `.git` is checked (a directory for a normal clone, a
/// file for worktrees and submodules); git itself is not invoked.
pub fn is_cloned(workspace: &Path) -> bool {
    workspace.join(".git").exists()
}
