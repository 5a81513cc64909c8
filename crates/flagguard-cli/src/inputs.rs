//! # Inputs Subcommand
//!
//! Validates the arguments of one client call, given as a JSON object
//! literal or as `@path` to a file containing one.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use flagguard_core::{ErrorPolicy, LogLevel, TracingLogger, ValidatorConfig};
use flagguard_input::InputValidator;
use serde_json::Value;

/// Arguments for the inputs subcommand.
#[derive(Args, Debug)]
pub struct InputsArgs {
    /// JSON object of call arguments, or `@file` to read it from a file.
    pub input: String,

    /// Propagate attribute and event-tag format errors as failures.
    #[arg(long)]
    pub raise: bool,

    /// Level for diagnostics on rejected fields. Overrides the config file.
    #[arg(long)]
    pub level: Option<LogLevel>,
}

/// Execute the inputs subcommand.
pub fn run_inputs(args: &InputsArgs, config: &ValidatorConfig) -> Result<u8> {
    let raw = match args.input.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(Path::new(path))
            .with_context(|| format!("reading inputs from {path}"))?,
        None => args.input.clone(),
    };
    let value: Value = serde_json::from_str(&raw).context("inputs are not valid JSON")?;

    let mut config = config.clone();
    if args.raise {
        config.error_policy = ErrorPolicy::Raise;
    }
    if let Some(level) = args.level {
        config.diagnostic_level = Some(level);
    }
    let validator = InputValidator::from_config(&config, Arc::new(TracingLogger));

    let outcome = validator
        .validate_value(&value)
        .context("input rejected by error handler")?;

    if outcome.is_valid() {
        println!("OK");
        return Ok(0);
    }

    println!("INVALID");
    for diagnostic in outcome.diagnostics() {
        println!("  {}: {}", diagnostic.field, diagnostic.message);
    }
    Ok(1)
}
