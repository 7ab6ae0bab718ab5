//! File classification: which directories to skip and which files to scan.
//!
//! Both sets are compile-time configuration data. Adjust them here when
//! porting the guard to another project layout.

use std::path::Path;

/// Directory base names that are never descended into.
pub const SKIP_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    ".turbo",
    ".next",
    ".git",
    ".idea",
    ".vscode",
    "coverage",
    "badgey-logos",
];

/// File extensions eligible for scanning (leading dot, case-sensitive).
pub const SCAN_EXTENSIONS: &[&str] = &[
    ".ts", ".tsx", ".js", ".jsx", ".mjs", ".cjs", ".css", ".scss", ".sass", ".less", ".html",
];

/// True when a directory with this base name must not be traversed.
pub fn is_skippable_dir(name: &str) -> bool {
    SKIP_DIRS.contains(&name)
}

/// True when the path's extension is on the scan allow-list. Files without
/// an extension, or with an unknown one, are skipped silently.
pub fn is_scannable(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => SCAN_EXTENSIONS.iter().any(|s| &s[1..] == ext),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_skippable_dirs() {
        assert!(is_skippable_dir("node_modules"));
        assert!(is_skippable_dir(".git"));
        assert!(is_skippable_dir("coverage"));
        assert!(!is_skippable_dir("src"));
        assert!(!is_skippable_dir("components"));
    }

    #[test]
    fn test_scannable_extensions() {
        assert!(is_scannable(&PathBuf::from("src/app.tsx")));
        assert!(is_scannable(&PathBuf::from("styles/main.scss")));
        assert!(is_scannable(&PathBuf::from("index.html")));
        assert!(!is_scannable(&PathBuf::from("README.md")));
        assert!(!is_scannable(&PathBuf::from("logo.png")));
        assert!(!is_scannable(&PathBuf::from("Makefile")));
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        assert!(!is_scannable(&PathBuf::from("src/app.TSX")));
    }
}
