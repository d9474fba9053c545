//! Tests for report aggregation.

use super::*;
use crate::diff::FileResult;

fn record(file: &str, insertions: u64, deletions: u64, ignored: bool, suffix: bool) -> DiffResult {
    DiffResult::new(
        FileResult {
            file: file.to_string(),
            filter_ignored: ignored,
            prefix_matched: true,
            suffix_matched: suffix,
        },
        FileDiffResult::new(insertions, deletions),
    )
}

fn sample() -> Vec<DiffResult> {
    vec![
        record("test1", 1, 100, false, true),
        record("test2", 2, 200, false, true),
        record("test4", 4, 400, true, false),
    ]
}

fn values(entries: &[OutputEntry]) -> Vec<(&'static str, &str)> {
    entries
        .iter()
        .map(|entry| (entry.key.name(), entry.value.as_str()))
        .collect()
}

#[test]
fn test_report_excludes_ignored_from_sums() {
    let report = Report::from_diffs(&sample(), &Config::default());

    assert_eq!(report.diff, "test1 test2 test4");
    assert_eq!(report.filtered_diff, "test1 test2");
    assert_eq!(report.count, 3);
    assert_eq!(report.insertions, 3);
    assert_eq!(report.deletions, 300);
    assert_eq!(report.lines, 303);
}

#[test]
fn test_report_includes_ignored_when_enabled() {
    let mut config = Config::default();
    config.summary_include_files = true;
    let report = Report::from_diffs(&sample(), &config);

    assert_eq!(report.count, 3);
    assert_eq!(report.insertions, 7);
    assert_eq!(report.deletions, 700);
    assert_eq!(report.lines, 707);
}

#[test]
fn test_diff_files_separator_and_quoting() {
    let diffs = vec![
        record("src/main.rs", 1, 0, false, true),
        record("docs/my file.md", 1, 0, false, true),
        record("it's.txt", 1, 0, false, false),
    ];

    assert_eq!(
        diff_files(&diffs, false, ","),
        "'src/main.rs','docs/my file.md','it'\\''s.txt'"
    );
    assert_eq!(
        diff_files(&diffs, true, "\n"),
        "'src/main.rs'\n'docs/my file.md'"
    );
}

#[test]
fn test_plain_paths_stay_bare() {
    let diffs = vec![
        record("test1", 1, 0, false, true),
        record("src/sub-dir/my_file", 1, 0, false, true),
        record("package.json", 1, 0, false, true),
        record("abc/composer.json", 1, 0, false, true),
    ];

    assert_eq!(
        diff_files(&diffs, false, " "),
        "test1 src/sub-dir/my_file 'package.json' 'abc/composer.json'"
    );
}

#[test]
fn test_filtered_list_is_subset_of_diff_list() {
    let diffs = sample();
    let all = diff_files(&diffs, false, " ");
    for path in diff_files(&diffs, true, " ").split(' ') {
        assert!(all.split(' ').any(|p| p == path));
    }
}

#[test]
fn test_output_entries_use_env_names() {
    let mut config = Config::default();
    config.env_names.diff = String::new();
    config.env_names.count = "FILE_COUNT".to_string();

    let entries = output_entries(&sample(), &config);
    let env: Vec<_> = entries
        .iter()
        .map(|entry| entry.env_name.as_deref())
        .collect();
    assert_eq!(
        env,
        vec![None, Some("GIT_DIFF_FILTERED"), Some("FILE_COUNT"), None, None, None]
    );
}

#[test]
fn test_empty_results_without_defaults() {
    let entries = output_entries(&[], &Config::default());
    assert_eq!(
        values(&entries),
        vec![
            ("diff", ""),
            ("filtered_diff", ""),
            ("count", "0"),
            ("insertions", "0"),
            ("deletions", "0"),
            ("lines", "0"),
        ]
    );
}

#[test]
fn test_empty_results_use_defaults() {
    let mut config = Config::default();
    config.defaults.diff = Some("1".to_string());
    config.defaults.filtered_diff = Some("2".to_string());
    config.defaults.count = Some("3".to_string());
    config.defaults.insertions = Some("4".to_string());
    config.defaults.deletions = Some("5".to_string());
    config.defaults.lines = Some("6".to_string());

    let entries = output_entries(&[], &config);
    assert_eq!(
        values(&entries),
        vec![
            ("diff", "1"),
            ("filtered_diff", "2"),
            ("count", "3"),
            ("insertions", "4"),
            ("deletions", "5"),
            ("lines", "6"),
        ]
    );
}

#[test]
fn test_defaults_ignored_when_results_exist() {
    let mut config = Config::default();
    config.defaults.count = Some("99".to_string());

    let entries = output_entries(&sample(), &config);
    assert_eq!(entries[2].key, OutputKey::Count);
    assert_eq!(entries[2].value, "3");
}
