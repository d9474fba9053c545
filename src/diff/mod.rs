//! Diff resolution for get-diff.
//!
//! This module turns a comparison between two refs into per-file records:
//! - Resolve base/head and map symbolic refs into the private remote namespace
//! - Shallow-fetch the refs that need it
//! - List changed files with `git diff --name-only --diff-filter=...`
//! - Classify each file and keep the ignored or filter-matched ones
//! - Parse a whitespace-insensitive `--shortstat` per kept file
//!
//! Git failures never escape this module: a failed fetch, listing, or stat
//! degrades to an empty contribution so the CI job always gets a report.

mod api;
mod helpers;
mod parser;


// Re-export public API
pub use api::{DiffPlan, DiffResult, FileDiffResult, FileResult, resolve_diff};
pub use parser::parse_shortstat;
