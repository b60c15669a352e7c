//! Shared status rendering for terminal output.

use owo_colors::OwoColorize;

/// Announce the start of a pipeline stage.
pub fn stage(msg: &str) {
    eprintln!("{} {}", "»".cyan(), msg);
}

/// Report a completed step.
pub fn ok(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

/// Report a non-fatal problem.
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Report a fatal problem.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}
