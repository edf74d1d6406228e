//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use syna_core::ProcessingMode;

/// Syna - tri-modal thought processing
#[derive(Parser, Debug)]
#[command(name = "syna", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "SYNA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process a thought ("-" reads stdin)
    Process {
        /// Text to process
        text: String,

        /// Force a mode instead of selecting one
        #[arg(short, long)]
        mode: Option<ProcessingMode>,
    },

    /// Show the task profile and the mode that would be selected
    Profile {
        /// Text to profile ("-" reads stdin)
        text: String,
    },

    /// Feed signal vectors through a bilateral synapse network
    Network {
        /// Comma-separated creative signals, one per synapse
        #[arg(long, value_delimiter = ',', required = true)]
        creative: Vec<f64>,

        /// Comma-separated analytical signals, one per synapse
        #[arg(long, value_delimiter = ',', required = true)]
        analytical: Vec<f64>,

        /// How many times to apply the signals
        #[arg(long, default_value_t = 1)]
        steps: usize,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Where to write the file
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
