//! CLI commands.

pub mod list;
pub mod run;

use crate::ConfigArgs;
use anyhow::Result;
use cutest_core::HarnessConfig;

/// Load the configuration file and apply the shared overrides.
pub fn load_config(args: &ConfigArgs) -> Result<HarnessConfig> {
    let mut config = HarnessConfig::load(&args.config)?;
    if let Some(suite) = &args.suite {
        config.suite_dir = suite.clone();
    }
    Ok(config)
}
