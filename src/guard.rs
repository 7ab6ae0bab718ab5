//! Guard runner: walks the configured targets and aggregates violations.

use crate::models::{GuardReport, Summary, Violation};
use crate::rules;
use crate::scan::{self, GuardError};
use crate::walk;
use std::path::Path;

/// Run the token guard over `targets`, resolved against `root`.
///
/// Violations accumulate in traversal order across files and registry order
/// within a line. An unreadable or non-UTF-8 file aborts the whole run;
/// a clean abort is preferred over a pass that silently skipped content.
pub fn run_guard(root: &Path, targets: &[String]) -> Result<GuardReport, GuardError> {
    let rules = rules::registry();
    let mut violations: Vec<Violation> = Vec::new();
    let mut files = 0usize;
    for target in targets {
        for path in walk::collect_targets(&root.join(target)) {
            let mut found = scan::scan_file(&path, root, &rules)?;
            violations.append(&mut found);
            files += 1;
        }
    }
    let summary = Summary {
        violations: violations.len(),
        files,
    };
    Ok(GuardReport {
        violations,
        summary,
    })
}
