//! E2E test harness for cutest.
//!
//! This module contains test infrastructure with builders and assertions
//! that not every scenario uses.

#![allow(dead_code)]

pub mod scenario;

// Re-export commonly used types
pub use assertions::Assertion;
pub use scenario::{Scenario, TestKind};
