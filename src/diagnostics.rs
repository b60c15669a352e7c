//! System diagnostics and dependency checking.
//!
//! Verifies that required external tools and credentials are available
//! before a run attempts any network or subprocess work.

use crate::config::Config;
use std::process::Command;

/// Result of a dependency check.
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// Tool is installed and working
    Ok,
    /// Tool is not found
    NotFound,
    /// Tool is found but has issues
    Warning(String),
}

/// Check if a command exists and is executable.
fn check_command(command: &str) -> CheckResult {
    match Command::new(command).arg("--version").output() {
        Ok(output) if output.status.success() => CheckResult::Ok,
        Ok(_) => CheckResult::Warning(format!("'{}' found but --version failed", command)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => CheckResult::NotFound,
        Err(e) => CheckResult::Warning(format!("Error checking '{}': {}", command, e)),
    }
}

/// Check that the configured API key environment variable is set and non-empty.
fn check_api_key(config: &Config) -> CheckResult {
    match std::env::var(&config.api.key_env) {
        Ok(value) if !value.trim().is_empty() => CheckResult::Ok,
        Ok(_) => CheckResult::Warning(format!("{} is set but empty", config.api.key_env)),
        Err(_) => CheckResult::NotFound,
    }
}

/// Run all dependency checks and print a report.
///
/// Returns true when every required dependency is available.
pub fn check_dependencies(config: &Config) -> bool {
    let mut all_ok = true;

    let checks: [(&str, CheckResult, &str); 3] = [
        ("yt-dlp", check_command("yt-dlp"), "audio download"),
        ("ffmpeg", check_command("ffmpeg"), "audio conversion and export"),
        (
            config.api.key_env.as_str(),
            check_api_key(config),
            "Google Cloud APIs",
        ),
    ];

    for (name, result, purpose) in checks {
        match result {
            CheckResult::Ok => eprintln!("  ok       {name} ({purpose})"),
            CheckResult::NotFound => {
                eprintln!("  missing  {name} ({purpose})");
                all_ok = false;
            }
            CheckResult::Warning(msg) => {
                eprintln!("  warning  {name}: {msg}");
                all_ok = false;
            }
        }
    }

    all_ok
}
