//! # Datafile Subcommand
//!
//! Checks a datafile on disk against the configured schema version, or
//! against a custom schema file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use flagguard_core::ValidatorConfig;
use flagguard_schema::{DatafileError, DatafileValidator};

/// Arguments for the datafile subcommand.
#[derive(Args, Debug)]
pub struct DatafileArgs {
    /// Path to the datafile.
    pub path: PathBuf,

    /// Validate against this schema file instead of the embedded one.
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Print every schema violation instead of a single verdict.
    #[arg(long)]
    pub report: bool,
}

/// Execute the datafile subcommand.
pub fn run_datafile(args: &DatafileArgs, config: &ValidatorConfig) -> Result<u8> {
    let validator = match &args.schema {
        Some(path) => DatafileValidator::from_file(path)?,
        None => DatafileValidator::new(config.schema_version)?,
    };
    let raw = std::fs::read_to_string(&args.path)
        .with_context(|| format!("reading datafile {}", args.path.display()))?;

    tracing::debug!(
        path = %args.path.display(),
        schema = validator.schema_name(),
        "validating datafile"
    );

    if !args.report {
        return Ok(verdict(&args.path, validator.is_valid(&raw)));
    }

    match validator.validate_str(&raw) {
        Ok(_) => Ok(verdict(&args.path, true)),
        Err(DatafileError::NonConforming { report, .. }) => {
            println!("INVALID: {} ({} violations)", args.path.display(), report.len());
            println!("{report}");
            Ok(1)
        }
        Err(DatafileError::NotJson { reason }) => {
            println!("INVALID: {} (not JSON: {reason})", args.path.display());
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}

fn verdict(path: &std::path::Path, valid: bool) -> u8 {
    if valid {
        println!("OK: {}", path.display());
        0
    } else {
        println!("INVALID: {}", path.display());
        1
    }
}
