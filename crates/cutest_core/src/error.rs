//! Error types for cutest_core operations.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for harness operations.
#[derive(Error, Debug)]
pub enum CutestError {
    /// The suite directory could not be listed.
    #[error("cannot read test suite directory {}: {}", path.display(), source)]
    SuiteUnreadable {
        /// Path to the suite directory
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The executable under test could not be started.
    #[error("cannot spawn executable {}: {}", executable.display(), source)]
    SpawnFailed {
        /// Path to the executable under test
        executable: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A single test file could not be read while checking for the opt-out marker.
    #[error("cannot read test file {}: {}", path.display(), source)]
    TestUnreadable {
        /// Path to the test file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Waiting on or terminating a running test failed.
    #[error("lost track of child process for {}: {}", path.display(), source)]
    WaitFailed {
        /// Test file the child was running
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Configuration error (loading, parsing, invalid values).
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl CutestError {
    /// Returns true if this error aborts the whole run.
    ///
    /// Only [`CutestError::TestUnreadable`] is scoped to a single test file.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::TestUnreadable { .. })
    }

    /// Returns a user-friendly recovery suggestion for the error, if available.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::SuiteUnreadable { .. } => {
                Some("Check the suite directory with '--suite <DIR>' or 'suite_dir' in cutest.toml.")
            }
            Self::SpawnFailed { .. } => Some(
                "Build the executable under test first, or point at it with '--exe <PATH>'.",
            ),
            Self::TestUnreadable { .. } => Some("Check the file permissions of the test file."),
            Self::ConfigError(_) => Some("Fix or remove cutest.toml to fall back to defaults."),
            _ => None,
        }
    }
}

/// Convenience Result type for cutest_core operations.
pub type Result<T> = std::result::Result<T, CutestError>;
