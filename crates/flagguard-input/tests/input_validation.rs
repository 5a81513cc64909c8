//! Integration tests: reporting behavior of the composite input validator
//! against recording collaborators.

use std::sync::{Arc, Mutex};

use flagguard_core::{
    ClientError, Collaborator, Collaborators, ErrorHandler, ErrorPolicy, LogLevel, Logger,
    ValidatorConfig,
};
use flagguard_input::{InputValidator, VariableBag};
use serde_json::{json, Value};

#[derive(Default)]
struct RecordingLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingLogger {
    fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries.lock().unwrap().push((level, message.to_string()));
    }
}

#[derive(Default)]
struct RecordingHandler {
    signals: Mutex<Vec<ClientError>>,
    raise: bool,
}

impl RecordingHandler {
    fn raising() -> Self {
        Self {
            raise: true,
            ..Self::default()
        }
    }

    fn signals(&self) -> Vec<ClientError> {
        self.signals.lock().unwrap().clone()
    }
}

impl ErrorHandler for RecordingHandler {
    fn handle_error(&self, error: ClientError) -> Result<(), ClientError> {
        self.signals.lock().unwrap().push(error.clone());
        if self.raise {
            Err(error)
        } else {
            Ok(())
        }
    }
}

fn recording() -> (Arc<RecordingLogger>, Arc<RecordingHandler>, InputValidator) {
    let logger = Arc::new(RecordingLogger::default());
    let handler = Arc::new(RecordingHandler::default());
    let validator = InputValidator::new()
        .with_logger(logger.clone())
        .with_error_handler(handler.clone());
    (logger, handler, validator)
}

#[test]
fn test_empty_and_non_mapping_bags_report_nothing() {
    let (logger, handler, validator) = recording();

    assert!(!validator.inputs_valid(&VariableBag::new()).unwrap());
    assert!(!validator.validate_value(&json!([1, 2])).unwrap().is_valid());
    assert!(!validator.validate_value(&json!({})).unwrap().is_valid());

    assert!(logger.entries().is_empty());
    assert!(handler.signals().is_empty());
}

#[test]
fn test_invalid_attributes_short_circuit() {
    let (logger, handler, validator) = recording();
    let bag = VariableBag::new()
        .with("attributes", "not-a-map")
        .with("user_id", json!(42))
        .with("experiment_key", "");

    let outcome = validator.validate(&bag).unwrap();

    assert!(!outcome.is_valid());
    assert_eq!(outcome.invalid_fields(), vec!["attributes"]);
    assert_eq!(
        logger.entries(),
        vec![(
            LogLevel::Error,
            "Provided attributes are in an invalid format.".to_string()
        )]
    );
    assert_eq!(handler.signals(), vec![ClientError::InvalidAttributeFormat]);
}

#[test]
fn test_invalid_event_tags_short_circuit() {
    let (logger, handler, validator) = recording();
    let bag = VariableBag::new()
        .with("attributes", json!({"plan": "pro"}))
        .with("event_tags", json!(["revenue"]))
        .with("event_key", "");

    let outcome = validator.validate(&bag).unwrap();

    assert!(!outcome.is_valid());
    assert_eq!(logger.entries().len(), 1);
    assert_eq!(logger.entries()[0].0, LogLevel::Error);
    assert_eq!(
        logger.entries()[0].1,
        "Provided event tags are in an invalid format."
    );
    assert_eq!(handler.signals(), vec![ClientError::InvalidEventTagFormat]);
}

#[test]
fn test_attributes_checked_before_event_tags() {
    let (_logger, handler, validator) = recording();
    let bag = VariableBag::new()
        .with("event_tags", json!(1))
        .with("attributes", json!(2));

    validator.validate(&bag).unwrap();

    assert_eq!(handler.signals(), vec![ClientError::InvalidAttributeFormat]);
}

#[test]
fn test_valid_mixed_bag() {
    let (logger, handler, validator) = recording();
    let bag = VariableBag::new()
        .with("event_tags", json!({}))
        .with("user_id", "")
        .with("extra", "ok");

    assert!(validator.inputs_valid(&bag).unwrap());
    assert!(logger.entries().is_empty());
    assert!(handler.signals().is_empty());
}

#[test]
fn test_field_failures_all_reported_without_escalation() {
    let (logger, handler, validator) = recording();
    let bag = VariableBag::new()
        .with("user_id", json!(42))
        .with("a", "x")
        .with("b", "");

    let outcome = validator.validate(&bag).unwrap();

    assert!(!outcome.is_valid());
    assert_eq!(outcome.invalid_fields(), vec!["user_id", "b"]);
    assert_eq!(
        logger.entries(),
        vec![
            (LogLevel::Error, "User ID is invalid".to_string()),
            (LogLevel::Error, "b is invalid".to_string()),
        ]
    );
    assert!(handler.signals().is_empty());
}

#[test]
fn test_generic_failures_silent_without_level() {
    let (logger, _handler, validator) = recording();
    let validator = validator.with_level(None);
    let bag = VariableBag::new()
        .with("experiment_key", "")
        .with("user_id", json!(false));

    let outcome = validator.validate(&bag).unwrap();

    assert!(!outcome.is_valid());
    assert_eq!(outcome.invalid_fields(), vec!["user_id", "experiment_key"]);
    // user_id is still reported, at error level.
    assert_eq!(
        logger.entries(),
        vec![(LogLevel::Error, "User ID is invalid".to_string())]
    );
}

#[test]
fn test_configured_level_used_for_fields() {
    let (logger, _handler, validator) = recording();
    let validator = validator.with_level(Some(LogLevel::Warn));

    validator
        .validate(&VariableBag::new().with("variable_key", json!(null)))
        .unwrap();

    assert_eq!(
        logger.entries(),
        vec![(LogLevel::Warn, "Variable key is invalid".to_string())]
    );
}

#[test]
fn test_raising_handler_propagates_signal() {
    let logger = Arc::new(RecordingLogger::default());
    let handler = Arc::new(RecordingHandler::raising());
    let validator = InputValidator::new()
        .with_logger(logger.clone())
        .with_error_handler(handler.clone());

    let err = validator
        .validate(&VariableBag::new().with("attributes", json!([])))
        .unwrap_err();

    assert_eq!(err, ClientError::InvalidAttributeFormat);
    // The failure is logged before escalation.
    assert_eq!(logger.entries().len(), 1);
}

#[test]
fn test_raising_handler_not_reached_by_field_failures() {
    let validator = InputValidator::new().with_error_handler(Arc::new(RecordingHandler::raising()));
    let outcome = validator
        .validate(&VariableBag::new().with("user_id", json!(1)).with("k", ""))
        .unwrap();
    assert!(!outcome.is_valid());
}

#[test]
fn test_repeated_validation_is_deterministic() {
    let (_logger, _handler, validator) = recording();
    let bag = VariableBag::new()
        .with("user_id", json!(42))
        .with("a", "x")
        .with("b", "");

    let first = validator.validate(&bag).unwrap();
    let second = validator.validate(&bag).unwrap();

    assert_eq!(first, second);
    assert_eq!(bag.len(), 3);
}

#[test]
fn test_from_collaborators() {
    let logger = Arc::new(RecordingLogger::default());
    let collaborators = Collaborators::from_parts(
        Some(Collaborator::Logger(logger.clone())),
        None,
        None,
    )
    .unwrap();
    let validator = InputValidator::from_collaborators(&collaborators, Some(LogLevel::Info));

    validator
        .validate(&VariableBag::new().with("event_key", ""))
        .unwrap();

    assert_eq!(
        logger.entries(),
        vec![(LogLevel::Info, "Event key is invalid".to_string())]
    );
}

#[test]
fn test_from_config_raise_policy() {
    let config = ValidatorConfig {
        error_policy: ErrorPolicy::Raise,
        ..ValidatorConfig::default()
    };
    let validator = InputValidator::from_config(&config, Arc::new(RecordingLogger::default()));

    let err = validator
        .validate_value(&json!({"event_tags": "revenue=10"}))
        .unwrap_err();
    assert_eq!(err, ClientError::InvalidEventTagFormat);
}

#[test]
fn test_validate_value_preserves_field_order() {
    let validator = InputValidator::new();
    let value: Value =
        serde_json::from_str(r#"{"z_key": "", "a_key": 1, "user_id": "u"}"#).unwrap();

    let outcome = validator.validate_value(&value).unwrap();

    assert_eq!(outcome.invalid_fields(), vec!["z_key", "a_key"]);
}
