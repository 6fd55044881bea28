//! Data Classification Calculator CLI
//!
//! Scores a data set across five risk pillars and exports the result.
//!
//! Usage:
//!   classify assess --name "HR files" --reputation 3:2 --national-likelihood 4 --confidentiality 3
//!   classify assess --input assessment.json --format json
//!   classify describe --pillar national --language th
//!   classify inspect classification-HR-files-2024-03-15.csv
//!   classify config

mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let mut config = match cli.config {
        Some(ref path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    config.apply_env(|key| std::env::var(key).ok())?;
    if let Some(language) = cli.language {
        config.display.language = language;
    }
    let language = config.display.language;

    match cli.command {
        Commands::Assess(args) => commands::assess::run(&args, &config, language),
        Commands::Describe(args) => commands::describe::run(&args, language),
        Commands::Inspect(args) => commands::inspect::run(&args, &config, language),
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
