//! File classification against the configured ignore list and path filters.
//!
//! A changed file is:
//! - **filter-ignored** when its base name is listed in `files`
//! - **prefix-matched** when no prefix filter is set, or any prefix pattern matches its start
//! - **suffix-matched** when no suffix filter is set, or any suffix pattern matches its end
//!
//! The diff pipeline keeps a file when it is filter-ignored, or when it is both
//! prefix- and suffix-matched.

use crate::config::PatternSyntax;
use crate::diff::FileResult;
use crate::error::{GetDiffError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::RegexSet;

/// Which end of the path a pattern is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Start,
    End,
}

#[derive(Debug, Clone)]
enum Matcher {
    Literal(RegexSet),
    Glob(GlobSet),
}

/// A set of anchored patterns; a path matches if any pattern matches.
///
/// An empty set matches every path.
#[derive(Debug, Clone)]
struct PatternSet {
    matcher: Option<Matcher>,
}

impl PatternSet {
    fn build(patterns: &[String], anchor: Anchor, syntax: PatternSyntax) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Self { matcher: None });
        }

        let matcher = match syntax {
            PatternSyntax::Literal => {
                let anchored = patterns.iter().map(|p| match anchor {
                    Anchor::Start => format!("^{}", regex::escape(p)),
                    Anchor::End => format!("{}$", regex::escape(p)),
                });
                let set = RegexSet::new(anchored).map_err(|e| {
                    GetDiffError::ConfigError(format!("invalid filter pattern: {}", e))
                })?;
                Matcher::Literal(set)
            }
            PatternSyntax::Glob => {
                let mut builder = GlobSetBuilder::new();
                for pattern in patterns {
                    let anchored = match anchor {
                        Anchor::Start => format!("{}*", pattern),
                        Anchor::End => format!("*{}", pattern),
                    };
                    let glob = Glob::new(&anchored).map_err(|e| {
                        GetDiffError::ConfigError(format!(
                            "invalid glob pattern '{}': {}",
                            pattern, e
                        ))
                    })?;
                    builder.add(glob);
                }
                let set = builder.build().map_err(|e| {
                    GetDiffError::ConfigError(format!("failed to build glob set: {}", e))
                })?;
                Matcher::Glob(set)
            }
        };

        Ok(Self {
            matcher: Some(matcher),
        })
    }

    fn matches(&self, path: &str) -> bool {
        match &self.matcher {
            None => true,
            Some(Matcher::Literal(set)) => set.is_match(path),
            Some(Matcher::Glob(set)) => set.is_match(path),
        }
    }
}

/// Compiled classification rules.
#[derive(Debug, Clone)]
pub struct FileClassifier {
    ignore: Vec<String>,
    prefix: PatternSet,
    suffix: PatternSet,
}

impl FileClassifier {
    /// Compile the ignore list and prefix/suffix patterns.
    ///
    /// # Returns
    ///
    /// * `Ok(FileClassifier)` - Ready to classify paths
    /// * `Err(GetDiffError::ConfigError)` - A glob pattern failed to compile
    pub fn new(
        ignore: &[String],
        prefix: &[String],
        suffix: &[String],
        syntax: PatternSyntax,
    ) -> Result<Self> {
        Ok(Self {
            ignore: ignore.to_vec(),
            prefix: PatternSet::build(prefix, Anchor::Start, syntax)?,
            suffix: PatternSet::build(suffix, Anchor::End, syntax)?,
        })
    }

    /// Classify a repository-relative path.
    pub fn classify(&self, path: &str) -> FileResult {
        FileResult {
            file: path.to_string(),
            filter_ignored: self.is_filter_ignored(path),
            prefix_matched: self.prefix.matches(path),
            suffix_matched: self.suffix.matches(path),
        }
    }

    fn is_filter_ignored(&self, path: &str) -> bool {
        !self.ignore.is_empty() && self.ignore.iter().any(|name| name == base_name(path))
    }
}

/// Last `/`-separated segment of a path.
fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn literal(ignore: &[&str], prefix: &[&str], suffix: &[&str]) -> FileClassifier {
        FileClassifier::new(
            &strings(ignore),
            &strings(prefix),
            &strings(suffix),
            PatternSyntax::Literal,
        )
        .unwrap()
    }

    fn glob(prefix: &[&str], suffix: &[&str]) -> FileClassifier {
        FileClassifier::new(&[], &strings(prefix), &strings(suffix), PatternSyntax::Glob).unwrap()
    }

    #[test]
    fn test_empty_rules_match_everything() {
        let classifier = literal(&[], &[], &[]);
        let result = classifier.classify("src/main.rs");
        assert!(!result.filter_ignored);
        assert!(result.prefix_matched);
        assert!(result.suffix_matched);
    }

    #[test]
    fn test_filter_ignored_uses_base_name() {
        let classifier = literal(&["package.json", "composer.lock"], &[], &[]);
        assert!(classifier.classify("package.json").filter_ignored);
        assert!(classifier.classify("abc/package.json").filter_ignored);
        assert!(!classifier.classify("package.json.bak").filter_ignored);
        assert!(!classifier.classify("package/index.js").filter_ignored);
    }

    #[test]
    fn test_filter_ignored_is_verbatim() {
        let classifier = literal(&["abc/package.json"], &[], &[]);
        // Only the base name is compared, so a path entry never matches.
        assert!(!classifier.classify("abc/package.json").filter_ignored);
    }

    #[test]
    fn test_prefix_matches_start_only() {
        let classifier = literal(&[], &["src/", "test/"], &[]);
        assert!(classifier.classify("src/main.rs").prefix_matched);
        assert!(classifier.classify("test/a.rs").prefix_matched);
        assert!(!classifier.classify("lib/src/main.rs").prefix_matched);
        assert!(!classifier.classify("README.md").prefix_matched);
    }

    #[test]
    fn test_suffix_matches_end_only() {
        let classifier = literal(&[], &[], &[".ts", ".json"]);
        assert!(classifier.classify("src/main.ts").suffix_matched);
        assert!(classifier.classify("package.json").suffix_matched);
        assert!(!classifier.classify("src/main.ts.map").suffix_matched);
        assert!(!classifier.classify("README.md").suffix_matched);
    }

    #[test]
    fn test_literal_patterns_do_not_treat_regex_metacharacters_specially() {
        let classifier = literal(&[], &["a.b"], &["(1)"]);
        assert!(classifier.classify("a.b/c(1)").prefix_matched);
        assert!(!classifier.classify("axb/c").prefix_matched);
        assert!(classifier.classify("a.b/c(1)").suffix_matched);
        assert!(!classifier.classify("a.b/c1").suffix_matched);
    }

    #[test]
    fn test_literal_patterns_do_not_treat_glob_characters_specially() {
        let classifier = literal(&[], &["src/*"], &[]);
        assert!(!classifier.classify("src/main.rs").prefix_matched);
        assert!(classifier.classify("src/*.rs").prefix_matched);
    }

    #[test]
    fn test_prefix_and_suffix_are_independent() {
        let classifier = literal(&["README.md"], &["src/"], &[".rs"]);
        let result = classifier.classify("docs/README.md");
        assert!(result.filter_ignored);
        assert!(!result.prefix_matched);
        assert!(!result.suffix_matched);

        let result = classifier.classify("src/README.md");
        assert!(result.filter_ignored);
        assert!(result.prefix_matched);
        assert!(!result.suffix_matched);
    }

    #[test]
    fn test_glob_prefix() {
        let classifier = glob(&["packages/*/src/"], &[]);
        assert!(classifier.classify("packages/core/src/lib.rs").prefix_matched);
        assert!(!classifier.classify("packages/core/test/lib.rs").prefix_matched);
    }

    #[test]
    fn test_glob_suffix() {
        let classifier = glob(&[], &[".{ts,tsx}"]);
        assert!(classifier.classify("src/app.tsx").suffix_matched);
        assert!(classifier.classify("src/app.ts").suffix_matched);
        assert!(!classifier.classify("src/app.js").suffix_matched);
    }

    #[test]
    fn test_invalid_glob_is_config_error() {
        let result = FileClassifier::new(
            &[],
            &strings(&["src/[unclosed"]),
            &[],
            PatternSyntax::Glob,
        );
        assert!(matches!(result, Err(GetDiffError::ConfigError(_))));
    }

    #[test]
    fn test_classification_differs_for_absolute_paths() {
        // Classification runs on repository-relative paths; an absolute path
        // would no longer satisfy an anchored prefix.
        let classifier = literal(&[], &["src/"], &[".rs"]);
        assert!(classifier.classify("src/lib.rs").prefix_matched);
        assert!(!classifier.classify("/work/repo/src/lib.rs").prefix_matched);
        assert!(classifier.classify("/work/repo/src/lib.rs").suffix_matched);
    }
}
