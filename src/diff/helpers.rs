//! Helper functions for diff resolution.

use std::path::Path;

/// Drop repeated entries, keeping the first occurrence of each.
pub(super) fn unique(items: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(items.len());
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

/// Prefix a repository-relative path with the workspace root.
pub(super) fn to_absolute(workspace: &Path, file: &str) -> String {
    workspace.join(file).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_preserves_first_occurrence() {
        let items = vec![
            "refs/pull/1/merge".to_string(),
            "refs/heads/main".to_string(),
            "refs/pull/1/merge".to_string(),
        ];
        assert_eq!(unique(items), vec!["refs/pull/1/merge", "refs/heads/main"]);
    }

    #[test]
    fn test_to_absolute() {
        let workspace = Path::new("/home/runner/work/repo/repo");
        assert_eq!(
            to_absolute(workspace, "src/main.ts"),
            "/home/runner/work/repo/repo/src/main.ts"
        );
    }
}
