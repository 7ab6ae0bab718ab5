//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tokenguard",
    version,
    about = "Design-token color guard",
    long_about = "Tokenguard — a tiny lint guard that fails the build when hard-coded color literals (hex, rgb/hsl, arbitrary utility colors) appear in the source tree instead of design-system tokens.\n\nExit codes: 0 = clean, 1 = violations found, 2 = environment error.",
    after_help = "Examples:\n  tokenguard\n  tokenguard src index.html\n  tokenguard --repo-root ../web --output json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "Scan targets, relative to the repo root (default: src, index.html)")]
    pub targets: Vec<String>,
    #[arg(long, help = "Repository root (default: nearest ancestor with .git)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}
