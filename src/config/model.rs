//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for one get-diff run.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Comparison settings
    // =========================================================================
    /// Range operator between base and head: `...` (merge base) or `..`.
    #[serde(default = "default_dot")]
    pub dot: String,

    /// Letters passed to `git diff --diff-filter` (default: "AMRC").
    #[serde(default = "default_diff_filter")]
    pub diff_filter: String,

    /// Depth of the shallow fetch of the compared refs.
    #[serde(default = "default_fetch_depth")]
    pub fetch_depth: u32,

    // =========================================================================
    // Filter settings
    // =========================================================================
    /// Base names of files that are always kept, bypassing the path filters.
    #[serde(default)]
    pub files: Vec<String>,

    /// Path prefixes; a file must match one of them (when any are set).
    #[serde(default)]
    pub prefix_filter: Vec<String>,

    /// Path suffixes; a file must match one of them (when any are set).
    #[serde(default)]
    pub suffix_filter: Vec<String>,

    /// How prefix and suffix patterns are interpreted.
    #[serde(default)]
    pub pattern_syntax: PatternSyntax,

    // =========================================================================
    // Report settings
    // =========================================================================
    /// Separator between paths in the `diff` and `filtered_diff` outputs.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Report absolute paths (prefixed with the workspace root).
    #[serde(default)]
    pub absolute: bool,

    /// Include filter-ignored files in the insertion/deletion/line sums.
    #[serde(default)]
    pub summary_include_files: bool,

    /// Environment variables the outputs are exported as.
    #[serde(default)]
    pub env_names: EnvNames,

    /// Output values used when the run produced no results.
    #[serde(default)]
    pub defaults: OutputDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dot: default_dot(),
            diff_filter: default_diff_filter(),
            fetch_depth: default_fetch_depth(),
            files: Vec::new(),
            prefix_filter: Vec::new(),
            suffix_filter: Vec::new(),
            pattern_syntax: PatternSyntax::default(),
            separator: default_separator(),
            absolute: false,
            summary_include_files: false,
            env_names: EnvNames::default(),
            defaults: OutputDefaults::default(),
        }
    }
}
