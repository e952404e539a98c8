//! Permission-filtered enumeration over a real directory tree.
//!
//! State is a filesystem path. `actions` lists the entries of a directory,
//! sorted by path for deterministic enumeration; an inaccessible or vanished
//! path yields no actions — the engine sees it as childless and never sees
//! the underlying error. Symlinks are not followed, so the explored space
//! stays a tree.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use fathom_search::{
    iterative_deepening_collect, EnumeratePolicyV1, EnumerationResult, Problem, SearchError,
};

/// Default minimum depth at which matches are recorded.
pub const DEFAULT_MIN_DEPTH: u32 = 3;

/// Default match budget.
pub const DEFAULT_MATCH_BUDGET: u64 = 10;

/// Default target permission pattern: rwxr-xr--.
pub const DEFAULT_TARGET_MODE: u32 = 0o754;

/// Enumeration world: regular files under `root` whose permission bits
/// equal `target_mode`.
pub struct PermissionScanProblem {
    root: PathBuf,
    target_mode: u32,
}

impl PermissionScanProblem {
    /// Scan under `root` for files whose `mode & 0o777` equals `target_mode`.
    #[must_use]
    pub fn new(root: PathBuf, target_mode: u32) -> Self {
        Self { root, target_mode }
    }
}

impl Problem for PermissionScanProblem {
    type State = PathBuf;
    type Action = PathBuf;

    fn initial(&self) -> PathBuf {
        self.root.clone()
    }

    fn actions(&self, state: &PathBuf) -> Vec<PathBuf> {
        let Ok(meta) = fs::symlink_metadata(state) else {
            return Vec::new();
        };
        if !meta.is_dir() {
            return Vec::new();
        }
        let Ok(entries) = fs::read_dir(state) else {
            return Vec::new();
        };
        let mut children: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .collect();
        children.sort();
        children
    }

    fn result(&self, _state: &PathBuf, action: &PathBuf) -> PathBuf {
        action.clone()
    }

    fn is_goal(&self, state: &PathBuf) -> bool {
        let Ok(meta) = fs::symlink_metadata(state) else {
            return false;
        };
        meta.is_file() && (meta.permissions().mode() & 0o777) == self.target_mode
    }
}

/// Scan `root` with the default policy: up to [`DEFAULT_MATCH_BUDGET`]
/// files at depth ≥ [`DEFAULT_MIN_DEPTH`] whose permission bits equal
/// `target_mode`.
///
/// # Errors
///
/// Never fails with the default policy; the `Result` mirrors
/// [`iterative_deepening_collect`].
pub fn scan_for_mode(
    root: PathBuf,
    target_mode: u32,
) -> Result<EnumerationResult<PathBuf>, SearchError> {
    let problem = PermissionScanProblem::new(root, target_mode);
    let policy = EnumeratePolicyV1 {
        min_depth: DEFAULT_MIN_DEPTH,
        max_matches: DEFAULT_MATCH_BUDGET,
    };
    iterative_deepening_collect(&problem, policy)
}
