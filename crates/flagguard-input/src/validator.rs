//! # Composite Input Validator
//!
//! Validates every named argument of a client call and reports each failure.
//!
//! ## Policy
//!
//! | Field | Valid when | On failure |
//! |---|---|---|
//! | bag itself | a non-empty mapping | `false`, no reporting |
//! | `attributes` | absent or a mapping | error log, error handler, stop |
//! | `event_tags` | absent or a mapping | error log, error handler, stop |
//! | `user_id` | absent or any string, `""` included | log, continue |
//! | any other key | non-empty string | log if a level is set, continue |
//!
//! Only the structured fields reach the error handler.

use std::fmt;
use std::sync::Arc;

use flagguard_core::{
    field_label, ClientError, Collaborators, ErrorHandler, LogLevel, Logger, NoOpErrorHandler,
    NoOpLogger, ValidatorConfig,
};
use serde_json::Value;

use crate::bag::{VariableBag, ATTRIBUTES_KEY, EVENT_TAGS_KEY, USER_ID_KEY};
use crate::checks::is_mapping_or_absent;

/// Keys checked by dedicated rules and skipped by the generic fold.
const DISTINGUISHED_KEYS: [&str; 3] = [ATTRIBUTES_KEY, EVENT_TAGS_KEY, USER_ID_KEY];

/// One reported failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Field that failed.
    pub field: String,
    /// Level it was logged at, or `None` if it was not logged.
    pub level: Option<LogLevel>,
    /// The diagnostic message.
    pub message: String,
}

/// Result of validating one bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    is_valid: bool,
    diagnostics: Vec<Diagnostic>,
}

impl ValidationOutcome {
    fn passed() -> Self {
        Self {
            is_valid: true,
            diagnostics: Vec::new(),
        }
    }

    fn rejected() -> Self {
        Self {
            is_valid: false,
            diagnostics: Vec::new(),
        }
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        self.is_valid = false;
        self.diagnostics.push(diagnostic);
    }

    /// Whether every checked field was valid.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Failures in the order they were found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Names of the fields that failed.
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.field.as_str()).collect()
    }
}

/// Validates per-call client arguments.
///
/// Defaults to a no-op logger and error handler with diagnostics at
/// [`LogLevel::Error`].
#[derive(Clone)]
pub struct InputValidator {
    logger: Arc<dyn Logger>,
    level: Option<LogLevel>,
    error_handler: Arc<dyn ErrorHandler>,
}

impl Default for InputValidator {
    fn default() -> Self {
        Self {
            logger: Arc::new(NoOpLogger),
            level: Some(LogLevel::Error),
            error_handler: Arc::new(NoOpErrorHandler),
        }
    }
}

impl fmt::Debug for InputValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputValidator")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl InputValidator {
    /// A validator with no-op collaborators.
    pub fn new() -> Self {
        Self::default()
    }

    /// A validator reporting through `collaborators`.
    pub fn from_collaborators(collaborators: &Collaborators, level: Option<LogLevel>) -> Self {
        Self {
            logger: Arc::clone(&collaborators.logger),
            level,
            error_handler: Arc::clone(&collaborators.error_handler),
        }
    }

    /// A validator configured by `config`, logging to `logger`.
    pub fn from_config(config: &ValidatorConfig, logger: Arc<dyn Logger>) -> Self {
        Self {
            logger,
            level: config.diagnostic_level,
            error_handler: config.error_policy.handler(),
        }
    }

    /// Replace the logger.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Set the per-field diagnostic level; `None` disables per-field logging.
    pub fn with_level(mut self, level: Option<LogLevel>) -> Self {
        self.level = level;
        self
    }

    /// Replace the error handler.
    pub fn with_error_handler(mut self, error_handler: Arc<dyn ErrorHandler>) -> Self {
        self.error_handler = error_handler;
        self
    }

    /// Shorthand for `validate(bag)?.is_valid()`.
    pub fn inputs_valid(&self, bag: &VariableBag) -> Result<bool, ClientError> {
        Ok(self.validate(bag)?.is_valid())
    }

    /// Validate an untyped argument set. Anything other than a JSON object
    /// is rejected without reporting.
    pub fn validate_value(&self, value: &Value) -> Result<ValidationOutcome, ClientError> {
        match VariableBag::from_value(value) {
            Some(bag) => self.validate(&bag),
            None => Ok(ValidationOutcome::rejected()),
        }
    }

    /// Validate every field of `bag`.
    ///
    /// # Errors
    ///
    /// Returns the signal for an invalid `attributes` or `event_tags` field
    /// only if the error handler propagates it. Invalid input otherwise
    /// yields `Ok` with [`ValidationOutcome::is_valid`] false.
    pub fn validate(&self, bag: &VariableBag) -> Result<ValidationOutcome, ClientError> {
        if bag.is_empty() {
            return Ok(ValidationOutcome::rejected());
        }

        if let Some(outcome) = self.check_structure(bag)? {
            return Ok(outcome);
        }

        Ok(self.check_fields(bag))
    }

    /// Phase 1: structured fields, stopping at the first failure.
    fn check_structure(&self, bag: &VariableBag) -> Result<Option<ValidationOutcome>, ClientError> {
        let checks = [
            (ATTRIBUTES_KEY, ClientError::InvalidAttributeFormat),
            (EVENT_TAGS_KEY, ClientError::InvalidEventTagFormat),
        ];

        for (key, signal) in checks {
            if is_mapping_or_absent(bag.get(key)) {
                continue;
            }

            let message = signal.to_string();
            self.logger.log(LogLevel::Error, &message);
            tracing::debug!(field = key, signal = signal.kind(), "structured input rejected");
            self.error_handler.handle_error(signal)?;

            let mut outcome = ValidationOutcome::passed();
            outcome.record(Diagnostic {
                field: key.to_string(),
                level: Some(LogLevel::Error),
                message,
            });
            return Ok(Some(outcome));
        }

        Ok(None)
    }

    /// Phase 2: `user_id` and every generic field, without early exit.
    fn check_fields(&self, bag: &VariableBag) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::passed();

        if bag.get(USER_ID_KEY).is_some_and(|v| !v.is_string()) {
            let level = self.level.unwrap_or(LogLevel::Error);
            outcome.record(self.report(USER_ID_KEY, Some(level)));
        }

        bag.iter()
            .filter(|(key, _)| !DISTINGUISHED_KEYS.contains(key))
            .fold(outcome, |mut outcome, (key, value)| {
                if !non_empty_string(value) {
                    outcome.record(self.report(key, self.level));
                }
                outcome
            })
    }

    fn report(&self, field: &str, level: Option<LogLevel>) -> Diagnostic {
        let message = format!("{} is invalid", field_label(field));
        if let Some(level) = level {
            self.logger.log(level, &message);
        }
        Diagnostic {
            field: field.to_string(),
            level,
            message,
        }
    }
}

fn non_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if !s.is_empty())
}
