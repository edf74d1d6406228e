#![forbid(unsafe_code)]

//! Syna CLI
//!
//! Command-line interface for the Syna processing engine.

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use syna_core::SynaConfig;

use cli::{Args, Command, ConfigAction};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays machine-readable
    let default_filter = if args.verbose {
        "info,syna=debug"
    } else {
        "warn,syna=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Command::Config {
        action: ConfigAction::Init { path, force },
    } = &args.command
    {
        return commands::config_init(path, *force);
    }

    let config = SynaConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    match args.command {
        Command::Process { text, mode } => {
            let text = commands::read_text(&text).await?;
            commands::process(&config, &text, mode, args.json).await
        }
        Command::Profile { text } => {
            let text = commands::read_text(&text).await?;
            commands::profile(&config, &text, args.json)
        }
        Command::Network {
            creative,
            analytical,
            steps,
        } => commands::network(&config, &creative, &analytical, steps, args.json),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config_show(&config),
            // Handled before the configuration is loaded
            ConfigAction::Init { .. } => Ok(()),
        },
    }
}
