//! Action-input layer of the configuration.
//!
//! Each setting can be overridden by an `INPUT_<NAME>` variable. Unset
//! variables leave the current value alone. A set-but-empty `SET_ENV_NAME*`
//! input disables that export and an empty `SEPARATOR` joins paths with
//! nothing; other empty inputs are ignored.

use super::model::Config;
use super::types::{OutputKey, PatternSyntax};
use crate::error::{GetDiffError, Result};

const FALSE_VALUES: &[&str] = &["false", "0", "", "no", "n", "off"];

fn env_name_input(key: OutputKey) -> &'static str {
    match key {
        OutputKey::Diff => "SET_ENV_NAME",
        OutputKey::FilteredDiff => "SET_ENV_NAME_FILTERED_DIFF",
        OutputKey::Count => "SET_ENV_NAME_COUNT",
        OutputKey::Insertions => "SET_ENV_NAME_INSERTIONS",
        OutputKey::Deletions => "SET_ENV_NAME_DELETIONS",
        OutputKey::Lines => "SET_ENV_NAME_LINES",
    }
}

fn default_input(key: OutputKey) -> &'static str {
    match key {
        OutputKey::Diff => "DIFF_DEFAULT",
        OutputKey::FilteredDiff => "FILTERED_DIFF_DEFAULT",
        OutputKey::Count => "COUNT_DEFAULT",
        OutputKey::Insertions => "INSERTIONS_DEFAULT",
        OutputKey::Deletions => "DELETIONS_DEFAULT",
        OutputKey::Lines => "LINES_DEFAULT",
    }
}

/// Parse a boolean action input.
pub(crate) fn parse_bool(value: &str) -> bool {
    !FALSE_VALUES.contains(&value.trim().to_lowercase().as_str())
}

/// Parse a list action input: one entry per line, blanks dropped.
pub(crate) fn parse_list(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    /// Apply `INPUT_*` overrides read through `lookup`.
    pub fn apply_inputs(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let input = |name: &str| lookup(&format!("INPUT_{}", name));
        let non_empty = |name: &str| input(name).filter(|v| !v.trim().is_empty());

        if let Some(dot) = non_empty("DOT") {
            self.dot = dot.trim().to_string();
        }
        if let Some(filter) = non_empty("DIFF_FILTER") {
            self.diff_filter = filter.trim().to_string();
        }
        // Taken raw: whitespace and the empty string are meaningful values.
        if let Some(separator) = input("SEPARATOR") {
            self.separator = separator;
        }
        if let Some(depth) = non_empty("FETCH_DEPTH") {
            self.fetch_depth = depth.trim().parse().map_err(|_| {
                GetDiffError::ConfigError(format!("FETCH_DEPTH must be a number (found '{}')", depth))
            })?;
        }

        if let Some(files) = non_empty("FILES") {
            self.files = parse_list(&files);
        }
        if let Some(prefix) = non_empty("PREFIX_FILTER") {
            self.prefix_filter = parse_list(&prefix);
        }
        if let Some(suffix) = non_empty("SUFFIX_FILTER") {
            self.suffix_filter = parse_list(&suffix);
        }
        if let Some(syntax) = non_empty("PATTERN_SYNTAX") {
            let syntax = syntax.trim().to_lowercase();
            self.pattern_syntax = PatternSyntax::from_str(&syntax).ok_or_else(|| {
                GetDiffError::ConfigError(format!(
                    "PATTERN_SYNTAX must be 'literal' or 'glob' (found '{}')",
                    syntax
                ))
            })?;
        }

        if let Some(absolute) = input("ABSOLUTE") {
            self.absolute = parse_bool(&absolute);
        }
        if let Some(include) = input("SUMMARY_INCLUDE_FILES") {
            self.summary_include_files = parse_bool(&include);
        }

        for key in OutputKey::ALL {
            if let Some(name) = input(env_name_input(key)) {
                *self.env_names.slot_mut(key) = name.trim().to_string();
            }
            if let Some(default) = input(default_input(key)).filter(|v| !v.is_empty()) {
                *self.defaults.slot_mut(key) = Some(default);
            }
        }

        Ok(())
    }
}
