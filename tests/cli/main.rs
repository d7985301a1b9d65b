//! CLI integration tests for slackfmt.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (format, rules)
//! - Stdin/stdout handling
//! - Exit codes
//! - Registry and config files

mod common;
mod format;
