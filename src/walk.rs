//! Tree walker: enumerates scannable files beneath the configured targets.

use crate::classify;
use std::fs;
use std::path::{Path, PathBuf};

/// Collect scannable files under `target` in a stable order.
///
/// A missing target is a silent no-op. A file target is returned only when
/// it passes the extension allow-list; a directory target is walked
/// recursively, skipping deny-listed directory names. Entries are sorted by
/// name so repeated runs over an unchanged tree visit files identically.
pub fn collect_targets(target: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if !target.exists() {
        return files;
    }
    if target.is_dir() {
        walk_dir(target, &mut files);
    } else if classify::is_scannable(target) {
        files.push(target.to_path_buf());
    }
    files
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        // Treated like a missing target; unreadable files are caught later.
        return;
    };
    let mut entries: Vec<_> = entries.filter_map(Result::ok).collect();
    entries.sort_by_key(|e| e.file_name());
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            if !classify::is_skippable_dir(&entry.file_name().to_string_lossy()) {
                walk_dir(&path, files);
            }
        } else if classify::is_scannable(&path) {
            files.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_target_is_silent_noop() {
        let dir = tempdir().unwrap();
        assert!(collect_targets(&dir.path().join("nope")).is_empty());
    }

    #[test]
    fn test_file_target_respects_allow_list() {
        let dir = tempdir().unwrap();
        let css = dir.path().join("main.css");
        let md = dir.path().join("notes.md");
        fs::write(&css, "a { color: red; }").unwrap();
        fs::write(&md, "# notes").unwrap();
        assert_eq!(collect_targets(&css), vec![css]);
        assert!(collect_targets(&md).is_empty());
    }

    #[test]
    fn test_deny_listed_dirs_are_never_entered() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/components")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(root.join("dist")).unwrap();
        fs::write(root.join("src/app.tsx"), "ok").unwrap();
        fs::write(root.join("src/components/btn.tsx"), "ok").unwrap();
        fs::write(root.join("node_modules/pkg/index.js"), "#fff").unwrap();
        fs::write(root.join("dist/bundle.js"), "#fff").unwrap();

        let files = collect_targets(root);
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.starts_with(root.join("src"))));
    }

    #[test]
    fn test_walk_order_is_stable() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("b/one.ts"), "").unwrap();
        fs::write(root.join("a/two.ts"), "").unwrap();
        fs::write(root.join("zero.ts"), "").unwrap();

        let first = collect_targets(root);
        let second = collect_targets(root);
        assert_eq!(first, second);
        assert_eq!(first[0], root.join("a/two.ts"));
        assert_eq!(first[1], root.join("b/one.ts"));
        assert_eq!(first[2], root.join("zero.ts"));
    }
}
