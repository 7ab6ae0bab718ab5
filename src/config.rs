//! Effective settings resolution.
//!
//! The guard deliberately has no config file surface; the deny/allow sets
//! and default targets are compile-time constants. CLI flags can still
//! override the repository root, the scan targets, and the output mode.
//! Precedence: CLI > defaults.

use std::path::{Path, PathBuf};

/// Default scan roots, resolved against the repository root.
pub const DEFAULT_TARGETS: &[&str] = &["src", "index.html"];

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the run.
pub struct Effective {
    pub repo_root: PathBuf,
    pub targets: Vec<String>,
    pub output: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops at the first ancestor containing a `.git` directory; falls back to
/// `start` when none is found. The start is canonicalized first: a relative
/// start such as `.` has no real parents, so walking it directly could
/// never ascend out of the current directory.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    let mut cur = start.as_path();
    loop {
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Resolve `Effective` by merging CLI flags with defaults.
///
/// An explicit `--repo-root` is taken as-is; otherwise the root is detected
/// from the current directory.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_targets: &[String],
    cli_output: Option<&str>,
) -> Effective {
    let repo_root = match cli_repo_root {
        Some(r) => PathBuf::from(r),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            detect_repo_root(&cwd)
        }
    };
    let targets = if cli_targets.is_empty() {
        DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect()
    } else {
        cli_targets.to_vec()
    };
    let output = cli_output.unwrap_or("human").to_string();
    Effective {
        repo_root,
        targets,
        output,
    }
}
