//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::DIFF_FILTER_LETTERS;
use crate::classify::FileClassifier;
use crate::error::{GetDiffError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully parsed config (not yet validated)
    /// * `Err(GetDiffError::ConfigError)` - Read or parse error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GetDiffError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| GetDiffError::ConfigError(format!("failed to parse config YAML: {}", e)))
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            GetDiffError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `dot` must be `..` or `...`
    /// - `diff_filter` must be non-empty git filter letters
    /// - `fetch_depth` must be positive
    /// - prefix/suffix patterns must compile
    pub fn validate(&self) -> Result<()> {
        if self.dot != ".." && self.dot != "..." {
            return Err(GetDiffError::ConfigError(format!(
                "dot must be '..' or '...' (found '{}')",
                self.dot
            )));
        }

        if self.diff_filter.is_empty() {
            return Err(GetDiffError::ConfigError(
                "diff_filter must not be empty".to_string(),
            ));
        }
        if let Some(bad) = self
            .diff_filter
            .chars()
            .find(|c| !DIFF_FILTER_LETTERS.contains(c.to_ascii_uppercase()))
        {
            return Err(GetDiffError::ConfigError(format!(
                "diff_filter contains unknown letter '{}' (allowed: {})",
                bad, DIFF_FILTER_LETTERS
            )));
        }

        if self.fetch_depth == 0 {
            return Err(GetDiffError::ConfigError(
                "fetch_depth must be greater than 0".to_string(),
            ));
        }

        self.classifier().map(|_| ())
    }

    /// Compile the ignore list and path filters.
    pub fn classifier(&self) -> Result<FileClassifier> {
        FileClassifier::new(
            &self.files,
            &self.prefix_filter,
            &self.suffix_filter,
            self.pattern_syntax,
        )
    }
}
