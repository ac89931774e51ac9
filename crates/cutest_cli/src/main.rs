//! Cutest CLI - runs a directory of test files through an executable under test.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use console::style;
use cutest_core::CutestError;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "cutest")]
#[command(about = "Test harness for single-file language implementations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every test file and print a tally
    Run {
        #[command(flatten)]
        config: ConfigArgs,
        /// Executable under test (overrides `executable`)
        #[arg(long)]
        exe: Option<PathBuf>,
        /// Per-test budget in milliseconds (overrides `timeout_ms`)
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// List discovered test files and whether they are ignored
    List {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Options shared by every command.
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration file
    #[arg(long, default_value = cutest_core::CONFIG_FILE_NAME)]
    pub config: PathBuf,
    /// Test suite directory (overrides `suite_dir`)
    #[arg(long)]
    pub suite: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Respects RUST_LOG environment variable (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            exe,
            timeout_ms,
        } => commands::run::run(&config, exe, timeout_ms).await,
        Commands::List { config } => commands::list::run(&config),
    };

    if let Err(err) = &result {
        if let Some(hint) = err
            .downcast_ref::<CutestError>()
            .and_then(CutestError::recovery_suggestion)
        {
            eprintln!("{} {}", style("hint:").cyan().bold(), hint);
        }
    }
    result
}
