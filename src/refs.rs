//! Ref resolution for the private fetch remote.
//!
//! Symbolic refs (anything under `refs/`) are fetched into a namespace owned
//! by get-diff so they never collide with the caller's own remotes or local
//! branches. Literal commit-ish values (SHAs, `HEAD~1`, ...) pass through.
//!
//! | ref                  | compare ref              | refspec                                                 |
//! |----------------------|--------------------------|---------------------------------------------------------|
//! | `refs/heads/master`  | `get-diff-action/master` | `refs/heads/master:refs/remotes/get-diff-action/master` |
//! | `refs/pull/55/merge` | `pull/55/merge`          | `refs/pull/55/merge:refs/pull/55/merge`                 |
//! | `a1b2c3...`          | `a1b2c3...`              | (not fetched)                                           |

/// Name of the remote every symbolic ref is fetched through.
pub const REMOTE_NAME: &str = "get-diff-action";

const REFS_PREFIX: &str = "refs/";
const HEADS_PREFIX: &str = "refs/heads/";

/// Returns true if `git_ref` is a symbolic ref rather than a literal commit-ish.
pub fn is_ref(git_ref: &str) -> bool {
    git_ref.starts_with(REFS_PREFIX)
}

/// Returns true if `git_ref` names a branch.
pub fn is_branch(git_ref: &str) -> bool {
    git_ref.starts_with(HEADS_PREFIX)
}

/// Turn a bare branch name into a full ref; full refs are returned unchanged.
pub fn normalize_ref(git_ref: &str) -> String {
    if is_ref(git_ref) {
        git_ref.to_string()
    } else {
        format!("{}{}", HEADS_PREFIX, git_ref)
    }
}

/// Local name a symbolic ref is stored under after fetching through `remote`.
pub fn local_ref(git_ref: &str, remote: &str) -> String {
    if let Some(branch) = git_ref.strip_prefix(HEADS_PREFIX) {
        format!("{}/{}", remote, branch)
    } else {
        git_ref
            .strip_prefix(REFS_PREFIX)
            .unwrap_or(git_ref)
            .to_string()
    }
}

/// Fetch refspec mapping `git_ref` to its local name.
pub fn refspec(git_ref: &str, remote: &str) -> String {
    let local = local_ref(git_ref, remote);
    if is_branch(git_ref) {
        format!("{}:refs/remotes/{}", git_ref, local)
    } else {
        format!("{}:refs/{}", git_ref, local)
    }
}

/// The expression to hand to `git diff` for one side of the comparison.
pub fn compare_ref(git_ref: &str, remote: &str) -> String {
    if is_ref(git_ref) {
        local_ref(git_ref, remote)
    } else {
        git_ref.to_string()
    }
}
