//! Output rendering for guard reports.
//!
//! Supports `human` (default) and `json` outputs. Human success goes to
//! stdout; violation details go to stderr so a build log keeps lint
//! findings apart from normal output. The JSON form mirrors `GuardReport`.

use crate::models::GuardReport;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print a guard report in the requested format.
pub fn print_report(report: &GuardReport, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(report)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            if report.passed() {
                let ok = format!(
                    "✔ token guard passed ({} files scanned)",
                    report.summary.files
                );
                if color {
                    println!("{}", ok.green().bold());
                } else {
                    println!("{}", ok);
                }
                return;
            }
            for line in compose_failure_lines(report, color) {
                eprintln!("{}", line);
            }
        }
    }
}

/// Compose the human failure body (pure) for testing purposes: a header,
/// one `file:line — rule: message` entry plus indented example per
/// violation, then the total count.
pub fn compose_failure_lines(report: &GuardReport, color: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let header = "✖ token guard violations found:";
    if color {
        lines.push(format!("{}\n", header.red().bold()));
    } else {
        lines.push(format!("{}\n", header));
    }
    for v in &report.violations {
        let loc = format!("{}:{}", v.file, v.line);
        if color {
            lines.push(format!("{} — {}: {}", loc.bold(), v.rule, v.message));
        } else {
            lines.push(format!("{} — {}: {}", loc, v.rule, v.message));
        }
        lines.push(format!("  {}\n", v.example));
    }
    let total = format!("Total violations: {}", report.summary.violations);
    if color {
        lines.push(total.bold().to_string());
    } else {
        lines.push(total);
    }
    lines
}

/// Compose the report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &GuardReport) -> JsonVal {
    serde_json::to_value(report).unwrap()
}
