//! Core data types shared across the harness.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// One discovered test case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TestFile {
    path: PathBuf,
}

impl TestFile {
    /// Wrap a path produced by discovery.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path handed to the executable under test.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for TestFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Classification of a single test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    /// Executable exited with status 0.
    Success,
    /// Executable exited with status 1.
    Failed,
    /// Any other exit, including termination by the watchdog.
    Timeout,
    /// File carried the opt-out marker; the executable was never started.
    Ignored,
}

impl Outcome {
    /// All categories, in report order.
    pub const ALL: [Outcome; 4] = [
        Outcome::Success,
        Outcome::Failed,
        Outcome::Timeout,
        Outcome::Ignored,
    ];

    /// Upper-case tag used in per-test status lines.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "SUCCESS",
            Outcome::Failed => "FAILED",
            Outcome::Timeout => "TIMEOUT",
            Outcome::Ignored => "IGNORED",
        }
    }

    /// Phrase used in the final tally (`3 x timed-out`).
    pub fn tally_label(self) -> &'static str {
        match self {
            Outcome::Success => "successful",
            Outcome::Failed => "failed",
            Outcome::Timeout => "timed-out",
            Outcome::Ignored => "ignored",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tally of outcomes over one run.
///
/// Every [`Outcome`] is present from construction, so `count` never misses.
/// Files that could not be read are kept apart in `errored`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    counts: BTreeMap<Outcome, usize>,
    errored: usize,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            counts: Outcome::ALL.iter().map(|&o| (o, 0)).collect(),
            errored: 0,
        }
    }
}

impl RunStats {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified test.
    pub fn record(&mut self, outcome: Outcome) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    /// Count one test that could not be read.
    pub fn record_error(&mut self) {
        self.errored += 1;
    }

    /// Number of tests classified as `outcome`.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Number of tests that could not be read.
    pub fn errored(&self) -> usize {
        self.errored
    }

    /// Number of tests processed, equal to the number discovered.
    pub fn total(&self) -> usize {
        self.counts.values().sum::<usize>() + self.errored
    }

    /// Returns a one-line summary message.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Outcome::ALL
            .iter()
            .map(|&o| format!("{} {}", self.count(o), o.tally_label()))
            .collect();
        if self.errored > 0 {
            parts.push(format!("{} errored", self.errored));
        }
        format!("{} tests run: {}", self.total(), parts.join(", "))
    }
}
