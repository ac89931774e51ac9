//! Configuration for a harness run.

use crate::error::{CutestError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "cutest.toml";

/// Default per-test wall-clock budget in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 100;

/// Settings for one harness invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Directory holding the test files (not searched recursively).
    pub suite_dir: PathBuf,

    /// Executable under test, invoked as `<executable> <test-file>`.
    pub executable: PathBuf,

    /// File-name suffix a test file must carry (default: `.js`).
    pub extension: String,

    /// Maximum wall-clock time a single test may run, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            suite_dir: PathBuf::from("tests/js_suite"),
            executable: PathBuf::from("build/cu"),
            extension: ".js".to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl HarnessConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults, relative to the current
    /// directory. Otherwise relative paths resolve against the file's own
    /// directory; a bare executable name is left alone for `PATH` lookup.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| CutestError::ConfigError(format!("failed to read config: {}", e)))?;
        let mut config: Self = toml::from_str(&content)
            .map_err(|e| CutestError::ConfigError(format!("failed to parse config: {}", e)))?;
        config.validate()?;

        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.anchor_to(base);
        }
        Ok(config)
    }

    fn anchor_to(&mut self, base: &Path) {
        if self.suite_dir.is_relative() {
            self.suite_dir = base.join(&self.suite_dir);
        }
        if self.executable.is_relative() && self.executable.components().count() > 1 {
            self.executable = base.join(&self.executable);
        }
    }

    /// Reject values no run could honor.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(CutestError::ConfigError(
                "timeout_ms must be greater than zero".into(),
            ));
        }
        if self.extension.is_empty() {
            return Err(CutestError::ConfigError(
                "extension must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Returns the timeout budget as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
