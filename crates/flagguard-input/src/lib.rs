//! # flagguard-input — Runtime Argument Validation
//!
//! Checks the arguments a host application passes on each client call
//! (user id, attributes, event tags, and keys such as `experiment_key`)
//! before they reach decision or event-dispatch logic.
//!
//! ## Checkers (`checks`)
//!
//! Pure predicates over JSON values: mapping shape for attributes and event
//! tags, numeric strings, finite numbers, and attribute values.
//!
//! ## Composite Validator (`validator`)
//!
//! [`InputValidator::validate`] runs in two phases over a [`VariableBag`]:
//!
//! 1. Structural checks on `attributes` and `event_tags`. A failure is logged
//!    at error level, escalated to the error handler, and ends validation.
//! 2. A fold over every other field. Each failure is logged and recorded,
//!    and checking continues so the caller sees every invalid field at once.
//!
//! ## Crate Policy
//!
//! - Depends only on `flagguard-core` internally.
//! - Never mutates caller data; distinguished keys are skipped, not removed.
//! - Malformed input resolves to `false`, never to an error. The only `Err`
//!   is an error handler choosing to propagate a signal.

pub mod bag;
pub mod checks;
pub mod validator;

pub use bag::{VariableBag, ATTRIBUTES_KEY, EVENT_TAGS_KEY, USER_ID_KEY};
pub use checks::{
    attribute_valid, attribute_value_valid, attributes_valid, event_tags_valid, finite_number,
    is_mapping_or_absent, string_numeric, value_numeric, FINITE_NUMBER_LIMIT,
};
pub use validator::{Diagnostic, InputValidator, ValidationOutcome};
