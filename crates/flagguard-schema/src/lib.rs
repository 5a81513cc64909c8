//! # flagguard-schema — Datafile Schema Validation
//!
//! Checks a raw datafile (the remotely fetched configuration describing
//! experiments, feature flags and audiences) against a fixed, versioned JSON
//! Schema before the client trusts it.
//!
//! ## Validity Gate
//!
//! [`is_datafile_valid`] and [`DatafileValidator::is_valid`] answer yes or
//! no. A string that does not parse as JSON is rejected without schema
//! validation; a parsed document is rejected on any schema violation.
//! Neither reports individual violations.
//!
//! ## Violation Reports
//!
//! [`DatafileValidator::validate_str`] and
//! [`DatafileValidator::validate_document`] return the same verdict with
//! a [`ViolationReport`]: where each failure sits, which schema keyword
//! failed, and why.
//!
//! ## Crate Policy
//!
//! - Depends only on `flagguard-core` internally.
//! - Schemas are embedded at compile time and never fetched over the
//!   network; remote `$ref`s in caller-supplied schemas are refused.
//! - Schema `$id` URIs must not change without bumping the schema version.

pub mod schemas;
pub mod validate;

pub use schemas::{embedded_schema, schema_name};
pub use validate::{is_datafile_valid, DatafileError, DatafileValidator, Violation, ViolationReport};
