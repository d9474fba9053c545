//! Configuration types and defaults for get-diff.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use serde::{Deserialize, Serialize};

/// How prefix and suffix filter patterns are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PatternSyntax {
    /// Patterns are matched verbatim (default).
    #[default]
    Literal,
    /// Patterns may contain `*`, `?`, `[...]` and `{a,b}` wildcards.
    Glob,
}

impl PatternSyntax {
    /// Parse a pattern syntax from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "literal" => Some(Self::Literal),
            "glob" => Some(Self::Glob),
            _ => None,
        }
    }
}

/// The values reported at the end of a run, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKey {
    Diff,
    FilteredDiff,
    Count,
    Insertions,
    Deletions,
    Lines,
}

impl OutputKey {
    pub const ALL: [OutputKey; 6] = [
        OutputKey::Diff,
        OutputKey::FilteredDiff,
        OutputKey::Count,
        OutputKey::Insertions,
        OutputKey::Deletions,
        OutputKey::Lines,
    ];

    /// Output name as seen by later workflow steps.
    pub fn name(self) -> &'static str {
        match self {
            OutputKey::Diff => "diff",
            OutputKey::FilteredDiff => "filtered_diff",
            OutputKey::Count => "count",
            OutputKey::Insertions => "insertions",
            OutputKey::Deletions => "deletions",
            OutputKey::Lines => "lines",
        }
    }
}

impl std::fmt::Display for OutputKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Names of the environment variables each output is also exported as.
///
/// An empty name disables the export for that output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvNames {
    pub diff: String,
    pub filtered_diff: String,
    pub count: String,
    pub insertions: String,
    pub deletions: String,
    pub lines: String,
}

impl Default for EnvNames {
    fn default() -> Self {
        Self {
            diff: "GIT_DIFF".to_string(),
            filtered_diff: "GIT_DIFF_FILTERED".to_string(),
            count: String::new(),
            insertions: String::new(),
            deletions: String::new(),
            lines: String::new(),
        }
    }
}

impl EnvNames {
    /// The variable name for `key`, or `None` when exporting is disabled.
    pub fn get(&self, key: OutputKey) -> Option<&str> {
        let name = match key {
            OutputKey::Diff => &self.diff,
            OutputKey::FilteredDiff => &self.filtered_diff,
            OutputKey::Count => &self.count,
            OutputKey::Insertions => &self.insertions,
            OutputKey::Deletions => &self.deletions,
            OutputKey::Lines => &self.lines,
        };
        Some(name.as_str()).filter(|n| !n.is_empty())
    }

    pub(crate) fn slot_mut(&mut self, key: OutputKey) -> &mut String {
        match key {
            OutputKey::Diff => &mut self.diff,
            OutputKey::FilteredDiff => &mut self.filtered_diff,
            OutputKey::Count => &mut self.count,
            OutputKey::Insertions => &mut self.insertions,
            OutputKey::Deletions => &mut self.deletions,
            OutputKey::Lines => &mut self.lines,
        }
    }
}

/// Values reported instead of the computed ones when a run has no results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered_diff: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insertions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<String>,
}

impl OutputDefaults {
    /// The configured default for `key`; empty strings count as unset.
    pub fn get(&self, key: OutputKey) -> Option<&str> {
        let value = match key {
            OutputKey::Diff => &self.diff,
            OutputKey::FilteredDiff => &self.filtered_diff,
            OutputKey::Count => &self.count,
            OutputKey::Insertions => &self.insertions,
            OutputKey::Deletions => &self.deletions,
            OutputKey::Lines => &self.lines,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    pub(crate) fn slot_mut(&mut self, key: OutputKey) -> &mut Option<String> {
        match key {
            OutputKey::Diff => &mut self.diff,
            OutputKey::FilteredDiff => &mut self.filtered_diff,
            OutputKey::Count => &mut self.count,
            OutputKey::Insertions => &mut self.insertions,
            OutputKey::Deletions => &mut self.deletions,
            OutputKey::Lines => &mut self.lines,
        }
    }
}

/// Git diff-filter letters accepted in `diff_filter` (either case).
pub const DIFF_FILTER_LETTERS: &str = "ACDMRTUXB";

// Default value functions for serde
pub(crate) fn default_dot() -> String {
    "...".to_string()
}
pub(crate) fn default_diff_filter() -> String {
    "AMRC".to_string()
}
pub(crate) fn default_separator() -> String {
    " ".to_string()
}
pub(crate) fn default_fetch_depth() -> u32 {
    10000
}
