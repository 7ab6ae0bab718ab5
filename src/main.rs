//! Tokenguard CLI binary entry point.
//! Walks the configured targets and exits non-zero when color literals are
//! found where design-system tokens belong.

mod classify;
mod cli;
mod config;
mod guard;
mod models;
mod output;
mod rules;
mod scan;
mod utils;
mod walk;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let eff = config::resolve_effective(
        cli.repo_root.as_deref(),
        &cli.targets,
        cli.output.as_deref(),
    );
    // Emit a single top info when the compile-time default targets are used
    if cli.targets.is_empty() && eff.output != "json" {
        eprintln!(
            "{} {}",
            utils::info_prefix(),
            format!("Using default targets: [{}]", config::DEFAULT_TARGETS.join(", "))
        );
    }
    match guard::run_guard(&eff.repo_root, &eff.targets) {
        Ok(report) => {
            output::print_report(&report, &eff.output);
            if !report.passed() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            // Environment failure (unreadable or binary file), not a lint
            // result; exit 2 keeps it distinct from a failed check.
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    }
}
