//! # Datafile Validation
//!
//! Runtime validation of datafiles against JSON Schema (Draft 7).
//!
//! ## Failure Policy
//!
//! Parsing comes first. A datafile that is not JSON is rejected outright,
//! since a malformed document cannot be partially trusted. A parsed document
//! is then checked against the compiled schema in one pass.
//!
//! ## Schema Resolution
//!
//! Internal `$ref`s of the form `#/definitions/<name>` are resolved by the
//! jsonschema crate natively. Any other `$ref` is refused by
//! [`OfflineRetriever`], so validation never touches the network.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use flagguard_core::DatafileSchemaVersion;
use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;
use thiserror::Error;

use crate::schemas::{embedded_schema, schema_name};

/// Retriever that refuses every external reference.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!("external schema references are not allowed: {}", uri.as_str()).into())
    }
}

/// Why a datafile or schema was rejected.
#[derive(Error, Debug)]
pub enum DatafileError {
    /// The datafile parsed but breaks one or more schema rules.
    #[error("datafile does not conform to '{schema}':\n{report}")]
    NonConforming {
        /// Schema the datafile was checked against.
        schema: String,
        /// Every rule the datafile breaks.
        report: ViolationReport,
    },

    /// The datafile is not JSON.
    #[error("datafile is not JSON: {reason}")]
    NotJson {
        /// Parser message.
        reason: String,
    },

    /// A schema file could not be read or is not JSON.
    #[error("cannot load schema '{schema}': {reason}")]
    SchemaUnreadable {
        /// Schema file name.
        schema: String,
        /// I/O or parser message.
        reason: String,
    },

    /// A schema is JSON but jsonschema refused to compile it.
    #[error("schema '{schema}' does not compile: {reason}")]
    SchemaRejected {
        /// Schema name.
        schema: String,
        /// Compiler message.
        reason: String,
    },
}

/// One broken schema rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the offending value; empty for the whole datafile.
    pub pointer: String,
    /// Schema keyword that failed, such as `required` or `type`.
    pub keyword: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = if self.pointer.is_empty() {
            "datafile"
        } else {
            self.pointer.as_str()
        };
        write!(f, "{at} [{}] {}", self.keyword, self.message)
    }
}

/// Violations found in one datafile, in schema evaluation order.
#[derive(Debug, Clone, Default)]
pub struct ViolationReport(Vec<Violation>);

impl ViolationReport {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// True if any violation was raised by `keyword`.
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.0.iter().any(|v| v.keyword == keyword)
    }
}

impl<'a> IntoIterator for &'a ViolationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ViolationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.0.iter();
        if let Some(first) = lines.next() {
            write!(f, "- {first}")?;
        }
        for violation in lines {
            write!(f, "\n- {violation}")?;
        }
        Ok(())
    }
}

/// A compiled datafile schema.
///
/// `DatafileValidator` is `Send + Sync`; compile once and share.
pub struct DatafileValidator {
    schema_name: String,
    validator: Validator,
}

impl fmt::Debug for DatafileValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatafileValidator")
            .field("schema_name", &self.schema_name)
            .finish_non_exhaustive()
    }
}

impl DatafileValidator {
    /// Compile the embedded schema for `version`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaUnreadable` or `SchemaRejected` if the embedded schema
    /// is broken.
    pub fn new(version: DatafileSchemaVersion) -> Result<Self, DatafileError> {
        let name = schema_name(version);
        let schema: Value = serde_json::from_str(embedded_schema(version)).map_err(|e| {
            DatafileError::SchemaUnreadable {
                schema: name.to_string(),
                reason: format!("invalid JSON: {e}"),
            }
        })?;
        Self::from_schema(name, &schema)
    }

    /// Compile a caller-supplied schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaRejected` if `schema` is not a valid Draft 7
    /// schema or references an external document.
    pub fn from_schema(
        schema_name: impl Into<String>,
        schema: &Value,
    ) -> Result<Self, DatafileError> {
        let schema_name = schema_name.into();
        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft7)
            .with_retriever(OfflineRetriever)
            .build(schema)
            .map_err(|e| DatafileError::SchemaRejected {
                schema: schema_name.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(schema = %schema_name, "compiled datafile schema");
        Ok(Self {
            schema_name,
            validator,
        })
    }

    /// Load and compile a schema file.
    ///
    /// # Errors
    ///
    /// Returns `SchemaUnreadable` if the file cannot be read or is not JSON,
    /// and `SchemaRejected` if it does not compile.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DatafileError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map_or_else(|| path.display().to_string(), str::to_string);

        let content = std::fs::read_to_string(path).map_err(|e| {
            DatafileError::SchemaUnreadable {
                schema: name.clone(),
                reason: format!("cannot read file: {e}"),
            }
        })?;
        let schema: Value = serde_json::from_str(&content).map_err(|e| {
            DatafileError::SchemaUnreadable {
                schema: name.clone(),
                reason: format!("invalid JSON: {e}"),
            }
        })?;

        Self::from_schema(name, &schema)
    }

    /// Name of the compiled schema.
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Yes/no gate: `raw` parses as JSON and conforms to the schema.
    pub fn is_valid(&self, raw: &str) -> bool {
        serde_json::from_str::<Value>(raw).is_ok_and(|doc| self.validator.is_valid(&doc))
    }

    /// Validate a parsed document, collecting every violation.
    ///
    /// # Errors
    ///
    /// Returns `NonConforming` with the full report if any rule fails.
    pub fn validate_document(&self, instance: &Value) -> Result<(), DatafileError> {
        let report = ViolationReport(
            self.validator
                .iter_errors(instance)
                .map(|e| {
                    let schema_path = e.schema_path.to_string();
                    Violation {
                        pointer: e.instance_path.to_string(),
                        keyword: schema_path.rsplit('/').next().unwrap_or_default().to_string(),
                        message: e.to_string(),
                    }
                })
                .collect(),
        );

        if report.is_empty() {
            return Ok(());
        }
        tracing::debug!(schema = %self.schema_name, violations = report.len(), "datafile rejected");
        Err(DatafileError::NonConforming {
            schema: self.schema_name.clone(),
            report,
        })
    }

    /// Parse and validate `raw`, returning the parsed document.
    ///
    /// # Errors
    ///
    /// Returns `NotJson` without consulting the schema if `raw` does not
    /// parse, or `NonConforming` on violations.
    pub fn validate_str(&self, raw: &str) -> Result<Value, DatafileError> {
        let document: Value = serde_json::from_str(raw).map_err(|e| DatafileError::NotJson {
            reason: e.to_string(),
        })?;
        self.validate_document(&document)?;
        Ok(document)
    }
}

/// Yes/no gate against the default (v2) embedded schema.
pub fn is_datafile_valid(raw: &str) -> bool {
    static DEFAULT: OnceLock<Option<DatafileValidator>> = OnceLock::new();

    DEFAULT
        .get_or_init(|| match DatafileValidator::new(DatafileSchemaVersion::default()) {
            Ok(validator) => Some(validator),
            Err(e) => {
                tracing::error!(error = %e, "embedded datafile schema failed to compile");
                None
            }
        })
        .as_ref()
        .is_some_and(|validator| validator.is_valid(raw))
}
