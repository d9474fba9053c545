//! Typed subset of the event payload JSON.

use crate::error::{GetDiffError, Result};
use serde::Deserialize;
use std::path::Path;

/// Fields of the event payload used to resolve the comparison.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventPayload {
    pub pull_request: Option<PullRequest>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub repository: Option<Repository>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub base: PullRequestRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestRef {
    #[serde(rename = "ref")]
    pub git_ref: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub default_branch: Option<String>,
}

impl EventPayload {
    /// Read and parse a payload file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GetDiffError::EventError(format!(
                "failed to read event payload '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse a payload from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| GetDiffError::EventError(format!("invalid event payload: {}", e)))
    }

    pub fn default_branch(&self) -> Option<&str> {
        self.repository
            .as_ref()
            .and_then(|repo| repo.default_branch.as_deref())
            .filter(|branch| !branch.is_empty())
    }
}
