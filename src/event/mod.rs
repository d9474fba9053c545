//! Triggering-event context for get-diff.
//!
//! The CI runner describes the triggering event through environment
//! variables and a JSON payload file:
//!
//! - `GITHUB_EVENT_NAME`: `pull_request`, `push`, ...
//! - `GITHUB_REF`: the ref the workflow runs on (e.g. `refs/pull/55/merge`)
//! - `GITHUB_SHA`: the commit the workflow runs on
//! - `GITHUB_EVENT_PATH`: path to the JSON payload
//! - `GITHUB_SERVER_URL`, `GITHUB_REPOSITORY`: where the repository lives
//!
//! Only the payload fields the diff needs are modeled; everything else is ignored.

mod payload;


pub use payload::{EventPayload, PullRequest, PullRequestRef, Repository};

use crate::error::Result;
use crate::refs::normalize_ref;
use std::path::Path;

const DEFAULT_SERVER_URL: &str = "https://github.com";

/// Events the diff is computed for; any other event yields an empty report.
pub const TARGET_EVENTS: &[&str] = &["pull_request", "pull_request_target", "push"];

/// Resolved comparison endpoints for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    pub base: String,
    pub head: String,
}

impl DiffInfo {
    pub fn new(base: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            head: head.into(),
        }
    }
}

/// Read-only description of the triggering event.
#[derive(Debug, Clone, Default)]
pub struct EventContext {
    pub event_name: String,
    pub git_ref: String,
    pub sha: String,
    pub payload: EventPayload,
    pub server_url: String,
    pub repository: Option<String>,
}

impl EventContext {
    /// Load the event context through `lookup` (normally `std::env::var`).
    ///
    /// A missing `GITHUB_EVENT_PATH` yields an empty payload; a path that
    /// cannot be read or parsed is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let payload = match lookup("GITHUB_EVENT_PATH").filter(|p| !p.is_empty()) {
            Some(path) => EventPayload::load(Path::new(&path))?,
            None => EventPayload::default(),
        };

        Ok(Self {
            event_name: lookup("GITHUB_EVENT_NAME").unwrap_or_default(),
            git_ref: lookup("GITHUB_REF").unwrap_or_default(),
            sha: lookup("GITHUB_SHA").unwrap_or_default(),
            payload,
            server_url: lookup("GITHUB_SERVER_URL")
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
            repository: lookup("GITHUB_REPOSITORY").filter(|repo| !repo.is_empty()),
        })
    }

    /// Load the event context from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Returns true if the diff should be computed for this event.
    pub fn is_target_event(&self) -> bool {
        TARGET_EVENTS.contains(&self.event_name.as_str())
    }

    /// URL of the repository the private remote should point at.
    pub fn remote_url(&self) -> Option<String> {
        self.repository.as_ref().map(|repo| {
            format!("{}/{}.git", self.server_url.trim_end_matches('/'), repo)
        })
    }

    /// Derive the comparison endpoints.
    ///
    /// - pull request: target branch against the event ref (the merge ref)
    /// - push: `before` against `after`; a new branch (zero or missing
    ///   `before`) compares the default branch against the pushed ref
    /// - anything else: the event sha against itself, i.e. nothing to compare
    pub fn diff_info(&self) -> DiffInfo {
        if let Some(pull) = &self.payload.pull_request {
            return DiffInfo::new(normalize_ref(&pull.base.git_ref), self.git_ref.clone());
        }

        if self.event_name == "push" {
            let after = self
                .payload
                .after
                .clone()
                .filter(|sha| is_valid_sha(sha))
                .unwrap_or_else(|| self.sha.clone());

            if let Some(before) = self.payload.before.as_deref().filter(|sha| is_valid_sha(sha)) {
                return DiffInfo::new(before, after);
            }
            if let Some(branch) = self.payload.default_branch() {
                return DiffInfo::new(normalize_ref(branch), self.git_ref.clone());
            }
            return DiffInfo::new(after.clone(), after);
        }

        DiffInfo::new(self.sha.clone(), self.sha.clone())
    }
}

/// A full, non-zero, 40-character hex commit id.
pub fn is_valid_sha(sha: &str) -> bool {
    sha.len() == 40
        && sha.bytes().all(|b| b.is_ascii_hexdigit())
        && sha.bytes().any(|b| b != b'0')
}
