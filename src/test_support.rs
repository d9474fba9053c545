use crate::error::{GetDiffError, Result};
use crate::git::Vcs;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init", "-q"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-q", "-m", "Initial commit"]);

    temp_dir
}

/// Write `content` to `file` (creating parent directories) and commit it.
pub(crate) fn commit_file(repo_dir: &Path, file: &str, content: &str) {
    let target = repo_dir.join(file);
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&target, content).unwrap();
    git(repo_dir, &["add", "."]);
    git(repo_dir, &["commit", "-q", "-m", &format!("Update {}", file)]);
}

pub(crate) fn head_sha(repo_dir: &Path) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(["rev-parse", "HEAD"])
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// A workspace directory that passes the checkout precondition without
/// being a real repository.
pub(crate) fn fake_checkout() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join(".git")).unwrap();
    temp_dir
}

/// Scripted [`Vcs`] that records every call as a git-like command line.
#[derive(Default)]
pub(crate) struct FakeVcs {
    pub calls: RefCell<Vec<String>>,
    pub listing: Option<Vec<String>>,
    pub stats: HashMap<String, String>,
    pub default_stat: String,
    pub fail_fetch: bool,
    pub fail_stat: bool,
}

impl FakeVcs {
    pub(crate) fn listing(files: &[&str]) -> Self {
        Self {
            listing: Some(files.iter().map(|f| f.to_string()).collect()),
            ..Self::default()
        }
    }

    pub(crate) fn with_default_stat(mut self, stat: &str) -> Self {
        self.default_stat = stat.to_string();
        self
    }

    pub(crate) fn with_stat(mut self, file: &str, stat: &str) -> Self {
        self.stats.insert(file.to_string(), stat.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl Vcs for FakeVcs {
    fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        self.record(format!("git remote add {} {}", name, url));
        Ok(())
    }

    fn fetch(&self, remote: &str, depth: u32, refspecs: &[String]) -> Result<()> {
        self.record(format!(
            "git fetch --no-tags --no-recurse-submodules --depth={} {} {}",
            depth,
            remote,
            refspecs.join(" ")
        ));
        if self.fail_fetch {
            return Err(GetDiffError::GitError("fetch failed".to_string()));
        }
        Ok(())
    }

    fn changed_files(&self, range: &str, diff_filter: &str) -> Result<Vec<String>> {
        self.record(format!(
            "git diff {} --diff-filter={} --name-only",
            range, diff_filter
        ));
        self.listing
            .clone()
            .ok_or_else(|| GetDiffError::GitError("bad revision".to_string()))
    }

    fn shortstat(&self, range: &str, file: &str) -> Result<String> {
        self.record(format!("git diff {} --shortstat -w -- {}", range, file));
        if self.fail_stat {
            return Err(GetDiffError::GitError("stat failed".to_string()));
        }
        Ok(self
            .stats
            .get(file)
            .cloned()
            .unwrap_or_else(|| self.default_stat.clone()))
    }
}
