//! tagscribe - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tagscribe::config::{DEFAULT_LOG_FILTER, LOG_ENV_VAR, Settings};
use tagscribe::git::{SystemGit, check_git_installed};
use tagscribe::pipeline::run;

/// Generate a changelog for the latest tagged release using Gemini.
#[derive(Parser, Debug)]
#[command(name = "tagscribe")]
#[command(about = "Generate a changelog for the latest tagged release using Gemini")]
#[command(version)]
struct Cli {
    /// Gemini API key (defaults to the GEMINI_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    check_git_installed().context("git is required")?;

    let settings = Settings::from_env(".").context("Invalid configuration")?;
    let git = SystemGit::new(".");

    run(&settings, &git, cli.api_key.as_deref()).await?;

    Ok(())
}

/// Diagnostics go to stderr, filtered by `TAGSCRIBE_LOG`.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
