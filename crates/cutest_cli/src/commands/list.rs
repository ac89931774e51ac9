//! List the suite without running it.

use super::load_config;
use crate::ConfigArgs;
use anyhow::Result;
use console::style;
use cutest_core::{discover, is_ignored};

/// Print every discovered test file with its ignore status.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = load_config(args)?;
    let tests = discover(&config.suite_dir, &config.extension)?;

    if tests.is_empty() {
        println!(
            "{} No test files ending in {} under {}",
            style("ℹ").blue(),
            config.extension,
            config.suite_dir.display()
        );
        return Ok(());
    }

    let mut ignored = 0;
    for test in &tests {
        match is_ignored(test) {
            Ok(true) => {
                ignored += 1;
                println!("  {} {}", style("ignored").dim(), test);
            }
            Ok(false) => println!("  {}  {}", style("active").green(), test),
            Err(e) => println!("  {}  {} ({})", style("error").red(), test, e),
        }
    }

    println!();
    println!(
        "{} test files, {} ignored",
        style(tests.len()).cyan(),
        style(ignored).cyan()
    );
    Ok(())
}
