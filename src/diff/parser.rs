//! Parsing of `git diff --shortstat` output.

use super::api::FileDiffResult;
use regex::Regex;
use std::sync::LazyLock;

static INSERTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) insertions?\(").expect("valid insertions regex"));
static DELETIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) deletions?\(").expect("valid deletions regex"));

/// Parse a single shortstat summary line.
///
/// Format: `" 1 file changed, 25 insertions(+), 4 deletions(-)"`, where either
/// count phrase may be missing. Empty output (e.g. a mode-only change) and
/// anything unrecognizable yield zero counts instead of an error.
pub fn parse_shortstat(stdout: &str) -> FileDiffResult {
    if stdout.trim().is_empty() {
        return FileDiffResult::default();
    }

    FileDiffResult::new(
        capture_count(&INSERTIONS, stdout),
        capture_count(&DELETIONS, stdout),
    )
}

fn capture_count(re: &Regex, text: &str) -> u64 {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
