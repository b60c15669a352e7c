use anyhow::Result;
use clap::{CommandFactory, Parser};
use revoice::app::{RunOptions, run_translate_command};
use revoice::cli::{Cli, Commands};
use revoice::config::Config;
use revoice::diagnostics::check_dependencies;
use revoice::output;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let Some(url) = cli.url else {
                Cli::command().print_help()?;
                std::process::exit(2);
            };
            let config = load_config(cli.config.as_deref())?;
            let options = RunOptions {
                output: cli.output,
                source_lang: cli.source_lang,
                target_lang: cli.target_lang,
                timeout_secs: cli.timeout,
                quiet: cli.quiet,
            };
            if let Err(e) = run_translate_command(config, url, options).await {
                output::error(&e.to_string());
                std::process::exit(1);
            }
        }
        Some(Commands::Check) => {
            let config = load_config(cli.config.as_deref())?;
            if !check_dependencies(&config) {
                std::process::exit(1);
            }
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "revoice", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Load configuration from the given path or the default location.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(p) => Config::load(p)?,
        None => Config::load_or_default(&Config::default_path())?,
    };
    Ok(config)
}
