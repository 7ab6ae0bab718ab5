//! Line scanner: applies the rule registry to every line of a file.

use crate::models::Violation;
use crate::rules::Rule;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Fatal environment errors that abort a guard run.
///
/// Lint findings are never errors; this covers misconfiguration such as a
/// binary file slipping through the extension allow-list or a permissions
/// problem, either of which could hide violations if skipped.
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Scan one file, returning violations in line order, then registry order
/// within a line.
///
/// `str::lines` handles both LF and CRLF terminators; line numbers are
/// 1-based. The recorded file path is relative to `root` when possible.
pub fn scan_file(path: &Path, root: &Path, rules: &[Rule]) -> Result<Vec<Violation>, GuardError> {
    let text = fs::read_to_string(path).map_err(|source| GuardError::Read {
        path: path.to_string_lossy().to_string(),
        source,
    })?;
    let rel = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    let file = rel.to_string_lossy().to_string();

    let mut violations = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        for rule in rules {
            if rule.is_match(line) {
                violations.push(Violation {
                    file: file.clone(),
                    line: idx + 1,
                    rule: rule.name.to_string(),
                    message: rule.message.to_string(),
                    example: line.trim().to_string(),
                });
            }
        }
    }
    Ok(violations)
}
