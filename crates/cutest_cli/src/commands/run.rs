//! Full suite run.

use super::load_config;
use crate::ConfigArgs;
use anyhow::Result;
use console::style;
use cutest_core::{CutestError, Harness, Outcome, Reporter, TestFile};
use std::path::PathBuf;
use tracing::debug;

/// Prints one status line per test as it completes.
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn test_finished(&mut self, test: &TestFile, outcome: Outcome) {
        let label = match outcome {
            Outcome::Success => style(outcome.label()).green().bold(),
            Outcome::Failed => style(outcome.label()).red().bold(),
            Outcome::Timeout => style(outcome.label()).yellow().bold(),
            Outcome::Ignored => style(outcome.label()).dim(),
        };
        match outcome {
            Outcome::Timeout => println!("{}: {} took too long.", label, test),
            Outcome::Ignored => println!("{}: {}", label, test),
            _ => println!("{}: {}.", label, test),
        }
    }

    fn test_errored(&mut self, test: &TestFile, error: &CutestError) {
        println!("{}: {}: {}", style("ERROR").red().bold(), test, error);
    }
}

/// Run every test in the suite and print the tally.
pub async fn run(args: &ConfigArgs, exe: Option<PathBuf>, timeout_ms: Option<u64>) -> Result<()> {
    let mut config = load_config(args)?;
    if let Some(exe) = exe {
        config.executable = exe;
    }
    if let Some(timeout_ms) = timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    config.validate()?;
    debug!(?config, "resolved configuration");

    let stats = Harness::from_config(&config)
        .run_with_reporter(&mut ConsoleReporter)
        .await?;

    println!("\n\n");
    println!("Total tests run: {}", style(stats.total()).bold());
    println!(
        "{} x successful",
        style(stats.count(Outcome::Success)).green()
    );
    println!("{} x failed", style(stats.count(Outcome::Failed)).red());
    println!(
        "{} x timed-out",
        style(stats.count(Outcome::Timeout)).yellow()
    );
    println!("{} x ignored", style(stats.count(Outcome::Ignored)).dim());
    if stats.errored() > 0 {
        println!("{} x errored", style(stats.errored()).red());
    }

    Ok(())
}
