//! Public API for diff resolution.

use crate::classify::FileClassifier;
use crate::config::Config;
use crate::context::is_cloned;
use crate::event::{DiffInfo, EventContext};
use crate::git::Vcs;
use crate::output::OutputSink;
use crate::refs::{REMOTE_NAME, compare_ref, is_ref, normalize_ref, refspec};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

use super::helpers::{to_absolute, unique};
use super::parser::parse_shortstat;

/// Message emitted when the workspace has not been checked out.
pub const NOT_CLONED_WARNING: &str = "Please checkout before call this action.";

/// Classification of one changed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    /// Repository-relative path as listed by git (absolute in absolute mode).
    pub file: String,
    /// The file's base name is in the configured ignore list.
    pub filter_ignored: bool,
    /// The path satisfies the prefix filter.
    pub prefix_matched: bool,
    /// The path satisfies the suffix filter.
    pub suffix_matched: bool,
}

impl FileResult {
    /// True when the path passes both the prefix and the suffix filter.
    pub fn is_filter_matched(&self) -> bool {
        self.prefix_matched && self.suffix_matched
    }

    /// True when the file belongs in the diff list at all.
    pub fn is_included(&self) -> bool {
        self.filter_ignored || self.is_filter_matched()
    }
}

/// Line statistics for one file.
///
/// `lines` is always `insertions + deletions`; the only way to build a value
/// is [`FileDiffResult::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileDiffResult {
    insertions: u64,
    deletions: u64,
    lines: u64,
}

impl FileDiffResult {
    pub fn new(insertions: u64, deletions: u64) -> Self {
        Self {
            insertions,
            deletions,
            lines: insertions.saturating_add(deletions),
        }
    }

    pub fn insertions(&self) -> u64 {
        self.insertions
    }

    pub fn deletions(&self) -> u64 {
        self.deletions
    }

    pub fn lines(&self) -> u64 {
        self.lines
    }
}

/// The complete record for one changed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    #[serde(flatten)]
    pub file: FileResult,
    #[serde(flatten)]
    pub stats: FileDiffResult,
}

impl DiffResult {
    pub fn new(file: FileResult, stats: FileDiffResult) -> Self {
        Self { file, stats }
    }

    /// Path of the file, as reported in outputs.
    pub fn path(&self) -> &str {
        &self.file.file
    }
}

/// Everything one diff resolution needs besides the VCS and the sink.
#[derive(Debug, Clone)]
pub struct DiffPlan<'a> {
    /// Effective configuration.
    pub config: &'a Config,
    /// Compiled ignore list and path filters.
    pub classifier: &'a FileClassifier,
    /// Root of the checked-out repository.
    pub workspace: &'a Path,
    /// The triggering event.
    pub event: &'a EventContext,
    /// Explicit comparison refs; when unset they are derived from `event`.
    pub diff_info: Option<DiffInfo>,
}

impl DiffPlan<'_> {
    fn resolve_diff_info(&self) -> DiffInfo {
        self.diff_info
            .clone()
            .unwrap_or_else(|| self.event.diff_info())
    }

    /// Refs that must be fetched before comparing: the event ref plus any
    /// symbolic endpoint, without duplicates.
    fn fetch_refs(&self, info: &DiffInfo) -> Vec<String> {
        let mut refs = Vec::new();
        if !self.event.git_ref.is_empty() {
            refs.push(normalize_ref(&self.event.git_ref));
        }
        for endpoint in [&info.base, &info.head] {
            if is_ref(endpoint) {
                refs.push(endpoint.clone());
            }
        }
        unique(refs)
    }
}

/// Resolve the ordered list of changed files for the plan.
///
/// Returns an empty list, without touching git, when the workspace is not a
/// checkout (after emitting a warning) or when base and head are identical.
/// Fetch, listing, and stat failures are logged and treated as empty.
/// Results keep the order of `git diff --name-only`.
pub fn resolve_diff(
    vcs: &dyn Vcs,
    sink: &mut dyn OutputSink,
    plan: &DiffPlan<'_>,
) -> Vec<DiffResult> {
    if !is_cloned(plan.workspace) {
        warn!(workspace = %plan.workspace.display(), "workspace is not a git checkout");
        if let Err(e) = sink.warning(NOT_CLONED_WARNING) {
            warn!(error = %e, "failed to emit warning");
        }
        return Vec::new();
    }

    let info = plan.resolve_diff_info();
    if info.base == info.head {
        info!(base = %info.base, "base and head are identical; nothing to compare");
        return Vec::new();
    }

    fetch(vcs, plan, &info);

    let config = plan.config;
    let range = format!(
        "{}{}{}",
        compare_ref(&info.base, REMOTE_NAME),
        config.dot,
        compare_ref(&info.head, REMOTE_NAME)
    );
    debug!(range = %range, "comparing");

    let files = match vcs.changed_files(&range, &config.diff_filter) {
        Ok(files) => files,
        Err(e) => {
            warn!(error = %e, range = %range, "failed to list changed files; assuming none");
            Vec::new()
        }
    };

    files
        .iter()
        .map(|file| plan.classifier.classify(file))
        .filter(FileResult::is_included)
        .map(|file| {
            let stats = file_stats(vcs, &range, &file.file);
            DiffResult::new(file, stats)
        })
        .map(|mut result| {
            if config.absolute {
                result.file.file = to_absolute(plan.workspace, &result.file.file);
            }
            result
        })
        .collect()
}

fn fetch(vcs: &dyn Vcs, plan: &DiffPlan<'_>, info: &DiffInfo) {
    if let Some(url) = plan.event.remote_url() {
        // The remote survives from earlier runs in the same checkout.
        if let Err(e) = vcs.add_remote(REMOTE_NAME, &url) {
            debug!(error = %e, "remote not added");
        }
    }

    let refspecs: Vec<String> = plan
        .fetch_refs(info)
        .iter()
        .map(|r| refspec(r, REMOTE_NAME))
        .collect();
    if refspecs.is_empty() {
        return;
    }
    if let Err(e) = vcs.fetch(REMOTE_NAME, plan.config.fetch_depth, &refspecs) {
        warn!(error = %e, "fetch failed; comparing with local history");
    }
}

fn file_stats(vcs: &dyn Vcs, range: &str, file: &str) -> FileDiffResult {
    match vcs.shortstat(range, file) {
        Ok(stdout) => parse_shortstat(&stdout),
        Err(e) => {
            warn!(error = %e, file = %file, "failed to read diff stats; counting zero");
            FileDiffResult::default()
        }
    }
}
