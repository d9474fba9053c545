//! Git command runner for get-diff.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling, plus the [`Vcs`] trait the diff pipeline
//! talks to. All git operations should go through this module.

use crate::error::{GetDiffError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::{debug, trace};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(GetDiffError::GitError)` - On spawn failure or non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    debug!(command = %format!("git {}", args.join(" ")), "running git");

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            GetDiffError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);
    for line in git_output.lines() {
        trace!("  >> {}", line);
    }

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(GetDiffError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// The version-control queries the diff pipeline needs.
///
/// Every method is a synchronous, text-producing call. Callers decide which
/// failures are fatal; the diff pipeline treats all of them as empty results.
pub trait Vcs {
    /// Register `name` as a remote pointing at `url`.
    fn add_remote(&self, name: &str, url: &str) -> Result<()>;

    /// Shallow-fetch `refspecs` from `remote`, at most `depth` commits deep.
    fn fetch(&self, remote: &str, depth: u32, refspecs: &[String]) -> Result<()>;

    /// List paths changed in `range` (e.g. `a...b`), limited by `diff_filter`.
    fn changed_files(&self, range: &str, diff_filter: &str) -> Result<Vec<String>>;

    /// Whitespace-insensitive shortstat summary for a single path in `range`.
    fn shortstat(&self, range: &str, file: &str) -> Result<String>;
}

/// [`Vcs`] implementation that shells out to the `git` binary.
#[derive(Debug, Clone)]
pub struct GitCli {
    cwd: PathBuf,
}

impl GitCli {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl Vcs for GitCli {
    fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        run_git(&self.cwd, &["remote", "add", name, url])?;
        Ok(())
    }

    fn fetch(&self, remote: &str, depth: u32, refspecs: &[String]) -> Result<()> {
        let depth = format!("--depth={}", depth);
        let mut args = vec![
            "fetch",
            "--no-tags",
            "--no-recurse-submodules",
            depth.as_str(),
            remote,
        ];
        args.extend(refspecs.iter().map(String::as_str));

        run_git(&self.cwd, &args)?;
        Ok(())
    }

    fn changed_files(&self, range: &str, diff_filter: &str) -> Result<Vec<String>> {
        let filter = format!("--diff-filter={}", diff_filter);
        let output = run_git(&self.cwd, &["diff", range, &filter, "--name-only"])?;

        Ok(output
            .lines()
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn shortstat(&self, range: &str, file: &str) -> Result<String> {
        let output = run_git(&self.cwd, &["diff", range, "--shortstat", "-w", "--", file])?;
        Ok(output.stdout)
    }
}
