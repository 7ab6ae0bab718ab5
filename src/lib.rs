//! Tokenguard core library.
//!
//! This crate exposes programmatic APIs for scanning a front-end source
//! tree for hard-coded color literals that should be design-system tokens.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Effective configuration resolution and repo-root detection.
//! - `classify`: Directory deny-list and file extension allow-list.
//! - `walk`: Recursive target traversal.
//! - `rules`: The ordered registry of disallowed color-literal patterns.
//! - `scan`: Per-line rule application over a file's contents.
//! - `guard`: Run orchestration and violation aggregation.
//! - `models`: Violation, summary, and report structs.
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.
pub mod classify;
pub mod cli;
pub mod config;
pub mod guard;
pub mod models;
pub mod output;
pub mod rules;
pub mod scan;
pub mod utils;
pub mod walk;
