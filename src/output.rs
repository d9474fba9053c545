//! Output sink for get-diff.
//!
//! Results reach later workflow steps through the CI runner's workflow
//! commands:
//!
//! - `::group::<name>` / `::endgroup::` fold diagnostic dumps in the job log
//! - `::warning::<message>` raises an annotation
//! - outputs and exported variables are appended to the files named by
//!   `GITHUB_OUTPUT` / `GITHUB_ENV` when the runner provides them, and are
//!   otherwise emitted as `::set-output` / `::set-env` commands

use crate::error::{GetDiffError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for run diagnostics, outputs, and exported variables.
pub trait OutputSink {
    /// Start a collapsible log group.
    fn start_group(&mut self, name: &str) -> Result<()>;

    /// Close the current log group.
    fn end_group(&mut self) -> Result<()>;

    /// Write a plain log line.
    fn info(&mut self, message: &str) -> Result<()>;

    /// Raise a warning annotation.
    fn warning(&mut self, message: &str) -> Result<()>;

    /// Set a step output.
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;

    /// Export an environment variable to later steps.
    fn export_variable(&mut self, name: &str, value: &str) -> Result<()>;
}

/// [`OutputSink`] speaking the workflow-command protocol.
pub struct WorkflowCommands<W: Write> {
    writer: W,
    output_file: Option<PathBuf>,
    env_file: Option<PathBuf>,
    delimiter_seq: usize,
}

impl WorkflowCommands<std::io::Stdout> {
    /// Sink on stdout, using `GITHUB_OUTPUT` / `GITHUB_ENV` when set.
    pub fn from_env() -> Self {
        let file = |key: &str| {
            std::env::var(key)
                .ok()
                .filter(|path| !path.is_empty())
                .map(PathBuf::from)
        };
        Self::new(std::io::stdout())
            .with_output_file(file("GITHUB_OUTPUT"))
            .with_env_file(file("GITHUB_ENV"))
    }
}

impl<W: Write> WorkflowCommands<W> {
    /// Sink writing every command to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            output_file: None,
            env_file: None,
            delimiter_seq: 0,
        }
    }

    pub fn with_output_file(mut self, path: Option<PathBuf>) -> Self {
        self.output_file = path;
        self
    }

    pub fn with_env_file(mut self, path: Option<PathBuf>) -> Self {
        self.env_file = path;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)
            .map_err(|e| GetDiffError::OutputError(format!("failed to write to log: {}", e)))
    }

    fn next_delimiter(&mut self, value: &str) -> String {
        loop {
            self.delimiter_seq += 1;
            let delimiter = format!("ghadelimiter_{}", self.delimiter_seq);
            if !value.contains(&delimiter) {
                return delimiter;
            }
        }
    }

    fn append_to_file(&mut self, path: &Path, name: &str, value: &str) -> Result<()> {
        let delimiter = self.next_delimiter(value);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                GetDiffError::OutputError(format!("failed to open '{}': {}", path.display(), e))
            })?;

        writeln!(file, "{}<<{}\n{}\n{}", name, delimiter, value, delimiter).map_err(|e| {
            GetDiffError::OutputError(format!("failed to write '{}': {}", path.display(), e))
        })
    }
}

impl<W: Write> OutputSink for WorkflowCommands<W> {
    fn start_group(&mut self, name: &str) -> Result<()> {
        self.line(&format!("::group::{}", escape_data(name)))
    }

    fn end_group(&mut self) -> Result<()> {
        self.line("::endgroup::")
    }

    fn info(&mut self, message: &str) -> Result<()> {
        self.line(message)
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        self.line(&format!("::warning::{}", escape_data(message)))
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        match self.output_file.clone() {
            Some(path) => self.append_to_file(&path, name, value),
            None => self.line(&format!(
                "::set-output name={}::{}",
                escape_property(name),
                escape_data(value)
            )),
        }
    }

    fn export_variable(&mut self, name: &str, value: &str) -> Result<()> {
        match self.env_file.clone() {
            Some(path) => self.append_to_file(&path, name, value),
            None => self.line(&format!(
                "::set-env name={}::{}",
                escape_property(name),
                escape_data(value)
            )),
        }
    }
}

/// Escape a workflow-command message.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow-command property value.
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
