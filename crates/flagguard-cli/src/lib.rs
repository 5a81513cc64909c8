//! # flagguard-cli — Command-Line Validation
//!
//! Provides the `flagguard` command-line interface over the datafile and
//! input validators, for CI checks of datafiles and for reproducing
//! rejected client calls.
//!
//! ## Subcommands
//!
//! ```bash
//! flagguard datafile path/to/datafile.json --report
//! flagguard inputs '{"user_id": "u1", "experiment_key": "checkout"}'
//! flagguard inputs @call.json --config flagguard.yaml
//! ```
//!
//! Exit code 0 means valid, 1 means invalid or failed.

pub mod datafile;
pub mod inputs;

use std::path::Path;

use anyhow::{Context, Result};
use flagguard_core::ValidatorConfig;

/// Load the configuration at `path`, or defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<ValidatorConfig> {
    match path {
        Some(path) => ValidatorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(ValidatorConfig::default()),
    }
}
