//! The run loop: discover, check the opt-out marker, execute, tally.

use crate::config::HarnessConfig;
use crate::discovery::discover;
use crate::error::{CutestError, Result};
use crate::ignore::is_ignored;
use crate::types::{Outcome, RunStats, TestFile};
use crate::watchdog::{TestRunner, Watchdog};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Receives per-test results as the run progresses.
pub trait Reporter {
    /// A test was classified (including [`Outcome::Ignored`]).
    fn test_finished(&mut self, test: &TestFile, outcome: Outcome);

    /// A test file could not be read; the run continues without it.
    fn test_errored(&mut self, test: &TestFile, error: &CutestError);
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn test_finished(&mut self, _test: &TestFile, _outcome: Outcome) {}

    fn test_errored(&mut self, _test: &TestFile, _error: &CutestError) {}
}

/// Drives every test in a suite directory through a [`TestRunner`].
///
/// Tests run one at a time in discovery order.
pub struct Harness<R = Watchdog> {
    suite_dir: PathBuf,
    extension: String,
    runner: R,
}

impl Harness<Watchdog> {
    /// Build a harness that spawns the configured executable.
    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::with_runner(
            config.suite_dir.clone(),
            config.extension.clone(),
            Watchdog::new(config.executable.clone(), config.timeout()),
        )
    }
}

impl<R: TestRunner> Harness<R> {
    /// Build a harness around an arbitrary runner.
    pub fn with_runner(
        suite_dir: impl Into<PathBuf>,
        extension: impl Into<String>,
        runner: R,
    ) -> Self {
        Self {
            suite_dir: suite_dir.into(),
            extension: extension.into(),
            runner,
        }
    }

    /// Discover the suite's test files.
    pub fn discover(&self) -> Result<Vec<TestFile>> {
        discover(&self.suite_dir, &self.extension)
    }

    /// Run the whole suite without reporting individual tests.
    pub async fn run(&self) -> Result<RunStats> {
        self.run_with_reporter(&mut SilentReporter).await
    }

    /// Run the whole suite, reporting each test as it completes.
    ///
    /// # Errors
    ///
    /// Fails only on run-aborting errors (unreadable suite, executable that
    /// cannot be spawned). Unreadable test files are reported and counted
    /// in [`RunStats::errored`] instead.
    pub async fn run_with_reporter(&self, reporter: &mut dyn Reporter) -> Result<RunStats> {
        let tests = self.discover()?;
        let mut stats = RunStats::new();

        for test in &tests {
            match self.run_one(test).await {
                Ok(outcome) => {
                    stats.record(outcome);
                    reporter.test_finished(test, outcome);
                }
                Err(e) if !e.is_fatal() => {
                    warn!(test = %test, error = %e, "skipping unreadable test");
                    stats.record_error();
                    reporter.test_errored(test, &e);
                }
                Err(e) => return Err(e),
            }
        }

        debug!(summary = %stats.summary(), "run complete");
        Ok(stats)
    }

    async fn run_one(&self, test: &TestFile) -> Result<Outcome> {
        if is_ignored(test)? {
            return Ok(Outcome::Ignored);
        }
        self.runner.run(test).await
    }
}
