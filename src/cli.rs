//! Command-line interface for revoice
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Cross-language re-dubbing of video speech
#[derive(Parser, Debug)]
#[command(
    name = "revoice",
    version,
    about = "Re-dub a video's speech in another language, preserving speakers and pacing"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Video URL to translate (default command)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress status output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output file path (default: derived from the video title)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Source language code (default: en)
    #[arg(long, value_name = "LANG")]
    pub source_lang: Option<String>,

    /// Target language code (default: fr)
    #[arg(long, value_name = "LANG")]
    pub target_lang: Option<String>,

    /// Hard deadline for transcription (default: 5m). Examples: 30s, 5m, 1h30m
    #[arg(long, value_name = "DURATION", value_parser = parse_timeout_secs)]
    pub timeout: Option<u64>,
}

/// Parse a timeout duration string into seconds.
///
/// Supports any duration format accepted by `humantime`: bare numbers
/// (seconds), single-unit (`30s`, `5m`, `2h`), and compound (`1h30m`).
fn parse_timeout_secs(s: &str) -> Result<u64, String> {
    let s = s.trim();
    // Bare number → seconds
    if let Ok(secs) = s.parse::<u64>() {
        return Ok(secs);
    }
    humantime::parse_duration(s)
        .map(|d| d.as_secs())
        .map_err(|e| e.to_string())
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check external dependencies and API credentials
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_url_as_translate_run() {
        let cli = Cli::parse_from(["revoice", "https://youtu.be/abc123"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.url.as_deref(), Some("https://youtu.be/abc123"));
    }

    #[test]
    fn parses_language_overrides() {
        let cli = Cli::parse_from([
            "revoice",
            "--source-lang",
            "en",
            "--target-lang",
            "de",
            "https://youtu.be/abc123",
        ]);
        assert_eq!(cli.source_lang.as_deref(), Some("en"));
        assert_eq!(cli.target_lang.as_deref(), Some("de"));
    }

    #[test]
    fn parses_check_subcommand() {
        let cli = Cli::parse_from(["revoice", "check"]);
        assert!(matches!(cli.command, Some(Commands::Check)));
    }

    #[test]
    fn timeout_accepts_bare_seconds_and_humantime() {
        assert_eq!(parse_timeout_secs("300"), Ok(300));
        assert_eq!(parse_timeout_secs("5m"), Ok(300));
        assert_eq!(parse_timeout_secs("1h30m"), Ok(5400));
        assert!(parse_timeout_secs("soon").is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
