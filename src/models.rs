//! Shared data models for guard output.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One disallowed pattern found on one line of one file.
pub struct Violation {
    /// Path relative to the repository root.
    pub file: String,
    /// 1-based physical line number.
    pub line: usize,
    pub rule: String,
    pub message: String,
    /// The offending line with surrounding whitespace trimmed.
    pub example: String,
}

#[derive(Debug, Serialize)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub violations: usize,
    pub files: usize,
}

#[derive(Debug, Serialize)]
/// Guard results container.
pub struct GuardReport {
    pub violations: Vec<Violation>,
    pub summary: Summary,
}

impl GuardReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}
