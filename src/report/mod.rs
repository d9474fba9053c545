//! Report aggregation for get-diff.
//!
//! Turns the per-file records into the values handed to later workflow steps:
//! - `diff`: every reported path
//! - `filtered_diff`: paths that pass both the prefix and the suffix filter
//! - `count`: number of reported files
//! - `insertions`, `deletions`, `lines`: sums, leaving out filter-ignored
//!   files unless `summary_include_files` is set
//!
//! Any path with a character outside `[A-Za-z0-9_/-]` is single-quoted so
//! the lists can be spliced into a command line.

#[cfg(test)]
mod tests;

use crate::config::{Config, OutputKey};
use crate::diff::{DiffResult, FileDiffResult};
use std::borrow::Cow;

/// Aggregated values for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub diff: String,
    pub filtered_diff: String,
    pub count: usize,
    pub insertions: u64,
    pub deletions: u64,
    pub lines: u64,
}

impl Report {
    /// Aggregate `diffs` with the separator and summary settings of `config`.
    pub fn from_diffs(diffs: &[DiffResult], config: &Config) -> Self {
        let include_ignored = config.summary_include_files;
        Self {
            diff: diff_files(diffs, false, &config.separator),
            filtered_diff: diff_files(diffs, true, &config.separator),
            count: diffs.len(),
            insertions: sum_results(diffs, include_ignored, FileDiffResult::insertions),
            deletions: sum_results(diffs, include_ignored, FileDiffResult::deletions),
            lines: sum_results(diffs, include_ignored, FileDiffResult::lines),
        }
    }

    /// The computed value for `key`, formatted for output.
    pub fn value(&self, key: OutputKey) -> String {
        match key {
            OutputKey::Diff => self.diff.clone(),
            OutputKey::FilteredDiff => self.filtered_diff.clone(),
            OutputKey::Count => self.count.to_string(),
            OutputKey::Insertions => self.insertions.to_string(),
            OutputKey::Deletions => self.deletions.to_string(),
            OutputKey::Lines => self.lines.to_string(),
        }
    }
}

/// One value to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEntry {
    pub key: OutputKey,
    pub value: String,
    /// Environment variable to export the value as, if enabled.
    pub env_name: Option<String>,
}

/// Build the entries to publish, in reporting order.
///
/// When `diffs` is empty a configured default replaces the computed value.
pub fn output_entries(diffs: &[DiffResult], config: &Config) -> Vec<OutputEntry> {
    let report = Report::from_diffs(diffs, config);

    OutputKey::ALL
        .iter()
        .map(|&key| {
            let value = match config.defaults.get(key) {
                Some(default) if diffs.is_empty() => default.to_string(),
                _ => report.value(key),
            };
            OutputEntry {
                key,
                value,
                env_name: config.env_names.get(key).map(str::to_string),
            }
        })
        .collect()
}

/// Join the (optionally filter-matched) paths with `separator`.
pub fn diff_files(diffs: &[DiffResult], filter: bool, separator: &str) -> String {
    diffs
        .iter()
        .filter(|item| !filter || item.file.is_filter_matched())
        .map(|item| quote_path(item.path()))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Single-quote a path unless it is made only of `[A-Za-z0-9_/-]`.
fn quote_path(path: &str) -> String {
    let plain = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '/' | '-'));
    if plain {
        return path.to_string();
    }

    match shell_words::quote(path) {
        // shell-words leaves `.` and a few other characters bare.
        Cow::Borrowed(bare) => format!("'{}'", bare),
        Cow::Owned(quoted) => quoted,
    }
}

/// Sum one statistic, skipping filter-ignored files unless `include_ignored`.
pub fn sum_results(
    diffs: &[DiffResult],
    include_ignored: bool,
    stat: impl Fn(&FileDiffResult) -> u64,
) -> u64 {
    diffs
        .iter()
        .filter(|item| include_ignored || !item.file.filter_ignored)
        .map(|item| stat(&item.stats))
        .sum()
}
