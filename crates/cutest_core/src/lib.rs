//! Cutest Core Library
//!
//! A test harness for language implementations that take a single source
//! file as their argument, providing:
//! - Discovery of a flat directory of test files
//! - An opt-out marker (`// cutest-ignore`) at the top of a file
//! - Per-test wall-clock budgets enforced by a watchdog
//! - Aggregated outcome statistics
//!
//! # Quick Start
//!
//! ```no_run
//! use cutest_core::{Harness, HarnessConfig, Outcome};
//!
//! # async fn demo() -> cutest_core::Result<()> {
//! let config = HarnessConfig::default();
//! let stats = Harness::from_config(&config).run().await?;
//!
//! println!("{}", stats.summary());
//! assert_eq!(stats.total(), stats.count(Outcome::Success)
//!     + stats.count(Outcome::Failed)
//!     + stats.count(Outcome::Timeout)
//!     + stats.count(Outcome::Ignored)
//!     + stats.errored());
//! # Ok(())
//! # }
//! ```
//!
//! # Outcomes
//!
//! The executable under test signals its verdict through its exit status:
//! `0` passes, `1` fails, and anything else (including being killed for
//! exceeding the budget) counts as a timeout.

mod config;
mod discovery;
mod error;
mod harness;
mod ignore;
mod types;
mod watchdog;

pub use config::{HarnessConfig, CONFIG_FILE_NAME, DEFAULT_TIMEOUT_MS};
pub use discovery::discover;
pub use error::{CutestError, Result};
pub use harness::{Harness, Reporter, SilentReporter};
pub use ignore::{is_ignored, IGNORE_MARKER};
pub use types::{Outcome, RunStats, TestFile};
pub use watchdog::{classify, TestRunner, Watchdog};
