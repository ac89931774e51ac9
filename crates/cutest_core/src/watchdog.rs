//! Run one test file under a wall-clock budget.
//!
//! The child is spawned, its wait is raced against a one-shot timer, and
//! the outcome is read from the exit status alone. The timer lives inside
//! the `timeout` future, so it is dropped the moment the wait resolves and
//! can never fire against a later test's process. A kill is only sent while
//! the child is still un-reaped, so its PID cannot have been recycled.

use crate::error::{CutestError, Result};
use crate::types::{Outcome, TestFile};
use std::future::Future;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::{debug, warn};

/// Something that can execute a single test file and classify it.
///
/// [`Watchdog`] is the real implementation; the seam exists so the
/// aggregation loop can be driven without spawning processes.
pub trait TestRunner {
    /// Execute `test` and return its outcome.
    ///
    /// Errors are fatal for the whole run.
    fn run(&self, test: &TestFile) -> impl Future<Output = Result<Outcome>>;
}

/// Spawns the executable under test and kills it when the budget runs out.
#[derive(Debug, Clone)]
pub struct Watchdog {
    executable: PathBuf,
    budget: Duration,
}

impl Watchdog {
    /// Create a watchdog for `executable` with a per-test `budget`.
    pub fn new(executable: impl Into<PathBuf>, budget: Duration) -> Self {
        Self {
            executable: executable.into(),
            budget,
        }
    }
}

impl TestRunner for Watchdog {
    async fn run(&self, test: &TestFile) -> Result<Outcome> {
        let started = Instant::now();

        // stdout/stderr pass through to the harness's terminal.
        let mut child = Command::new(&self.executable)
            .arg(test.path())
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| CutestError::SpawnFailed {
                executable: self.executable.clone(),
                source,
            })?;
        debug!(test = %test, pid = ?child.id(), "spawned");

        let lost = |source| CutestError::WaitFailed {
            path: test.path().to_path_buf(),
            source,
        };

        let (status, killed) = match tokio::time::timeout(self.budget, child.wait()).await {
            Ok(status) => (status.map_err(lost)?, false),
            Err(_) => {
                warn!(
                    test = %test,
                    budget_ms = self.budget.as_millis() as u64,
                    "budget exceeded, killing"
                );
                child.start_kill().map_err(lost)?;
                (child.wait().await.map_err(lost)?, true)
            }
        };

        let outcome = classify(status);
        if outcome == Outcome::Timeout && !killed {
            warn!(test = %test, status = %status, "exited abnormally without being killed");
        }
        debug!(
            test = %test,
            status = %status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            outcome = %outcome,
            "finished"
        );
        Ok(outcome)
    }
}

/// Map an exit status onto an outcome.
///
/// Exit code 0 is [`Outcome::Success`], 1 is [`Outcome::Failed`], and
/// everything else (other codes, signals) is [`Outcome::Timeout`].
pub fn classify(status: ExitStatus) -> Outcome {
    match status.code() {
        Some(0) => Outcome::Success,
        Some(1) => Outcome::Failed,
        _ => Outcome::Timeout,
    }
}
