use super::assertions::Assertion;
use super::runner::{RunReport, ScenarioRunner};
use anyhow::{Context, Result};
use cutest_core::Outcome;
use std::path::PathBuf;
use std::time::Duration;

/// Behaviour of a generated test file when the executable runs it
#[derive(Clone, Debug)]
pub enum TestKind {
    /// Exits 0
    Passing,
    /// Exits 1
    Failing,
    /// Exits with an arbitrary code
    ExitsWith(i32),
    /// Never finishes on its own
    Hanging,
    /// Starts with the opt-out marker; would pass if run
    Ignored,
    /// Literal file content, not a spy
    Raw(String),
}

/// Fluent DSL for building test scenarios
pub struct Scenario {
    name: String,
    fixture: Option<String>,
    tests: Vec<(String, TestKind)>,
    subdirs: Vec<String>,
    executable: Option<PathBuf>,
    timeout: Duration,
    assertions: Vec<Assertion>,
}

impl Scenario {
    /// Create a new scenario with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fixture: None,
            tests: Vec::new(),
            subdirs: Vec::new(),
            executable: None,
            // Generous enough that shell startup never trips it on a busy machine.
            timeout: Duration::from_millis(1000),
            assertions: Vec::new(),
        }
    }

    // ===== Suite setup =====

    /// Seed the suite directory from `tests/fixtures/<name>`
    pub fn from_fixture(mut self, name: &str) -> Self {
        self.fixture = Some(name.to_string());
        self
    }

    /// Add a test file of the given kind
    pub fn with_test(mut self, name: &str, kind: TestKind) -> Self {
        self.tests.push((name.to_string(), kind));
        self
    }

    /// Add a test file that exits 0
    pub fn passing(self, name: &str) -> Self {
        self.with_test(name, TestKind::Passing)
    }

    /// Add a test file that exits 1
    pub fn failing(self, name: &str) -> Self {
        self.with_test(name, TestKind::Failing)
    }

    /// Add a test file that never exits
    pub fn hanging(self, name: &str) -> Self {
        self.with_test(name, TestKind::Hanging)
    }

    /// Add a test file carrying the opt-out marker
    pub fn ignored(self, name: &str) -> Self {
        self.with_test(name, TestKind::Ignored)
    }

    /// Add a file with literal content
    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.with_test(name, TestKind::Raw(content.to_string()))
    }

    /// Add a subdirectory to the suite directory
    pub fn with_subdir(mut self, name: &str) -> Self {
        self.subdirs.push(name.to_string());
        self
    }

    /// Run tests with something other than `/bin/sh`
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = Some(executable.into());
        self
    }

    /// Override the per-test budget
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    // ===== Assertions =====

    /// Assert the exact tally of the four outcome categories
    pub fn assert_tally(
        mut self,
        success: usize,
        failed: usize,
        timeout: usize,
        ignored: usize,
    ) -> Self {
        self.assertions.push(Assertion::Tally {
            success,
            failed,
            timeout,
            ignored,
        });
        self
    }

    /// Assert the total number of tests processed
    pub fn assert_total(mut self, total: usize) -> Self {
        self.assertions.push(Assertion::Total(total));
        self
    }

    /// Assert a single file's outcome
    pub fn assert_outcome(mut self, name: &str, outcome: Outcome) -> Self {
        self.assertions.push(Assertion::OutcomeOf {
            name: name.to_string(),
            outcome,
        });
        self
    }

    /// Assert the executable was started for exactly these files, in order
    pub fn assert_invoked(mut self, names: &[&str]) -> Self {
        self.assertions.push(Assertion::InvokedExactly(
            names.iter().map(|n| n.to_string()).collect(),
        ));
        self
    }

    /// Assert the executable was never started for a file
    pub fn assert_not_invoked(mut self, name: &str) -> Self {
        self.assertions.push(Assertion::NotInvoked(name.to_string()));
        self
    }

    /// Assert a hanging file's process is gone after the run
    pub fn assert_process_reaped(mut self, name: &str) -> Self {
        self.assertions.push(Assertion::ProcessReaped(name.to_string()));
        self
    }

    /// Add a custom assertion
    pub fn assert_custom<F>(mut self, f: F) -> Self
    where
        F: Fn(&RunReport) -> Result<()> + 'static,
    {
        self.assertions.push(Assertion::Custom(Box::new(f)));
        self
    }

    // ===== Execution =====

    /// Run the scenario and check every assertion
    pub fn run(self) -> Result<RunReport> {
        let mut runner =
            ScenarioRunner::prepare(self.fixture.as_deref(), &self.tests, &self.subdirs)
                .with_context(|| format!("Scenario '{}': setup failed", self.name))?;
        if let Some(executable) = self.executable {
            runner = runner.with_executable(executable);
        }

        let report = runner
            .execute(self.timeout)
            .with_context(|| format!("Scenario '{}': run failed", self.name))?;

        for (i, assertion) in self.assertions.iter().enumerate() {
            assertion.check(&report).with_context(|| {
                format!("Scenario '{}': assertion {} {:?}", self.name, i, assertion)
            })?;
        }

        Ok(report)
    }
}
