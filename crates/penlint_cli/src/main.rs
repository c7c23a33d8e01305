//! Penlint CLI
//!
//! Grammar and style linter for plain prose.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_file;
mod output;

/// Penlint - grammar and style linter for plain prose
#[derive(Parser)]
#[command(name = "penlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint files ("-" reads stdin)
    Lint {
        /// Files to lint
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Comma-separated rule ids to run (overrides the config file)
        #[arg(long)]
        rules: Option<String>,

        /// Run rules across the thread pool
        #[arg(long)]
        parallel: bool,

        /// Per-document deadline in milliseconds
        #[arg(long)]
        deadline_ms: Option<u64>,
    },

    /// List available rules
    Rules,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_issues) => {
            if has_issues {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::Lint {
            files,
            format,
            rules,
            parallel,
            deadline_ms,
        } => commands::lint::run(
            cli.config.as_deref(),
            files,
            format,
            rules.as_deref(),
            *parallel,
            *deadline_ms,
        ),
        Commands::Rules => commands::rules::run().map(|_| false),
    }
}
