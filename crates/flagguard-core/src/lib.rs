//! # flagguard-core — Foundational Types
//!
//! Defines the vocabulary shared by every other flagguard crate: the error
//! signals a feature-flag client raises on malformed input, the ordered log
//! levels, and the pluggable collaborators (logger, error handler, event
//! dispatcher) that validators report through.
//!
//! ## Key Design Principles
//!
//! 1. **Collaborators are traits.** A logger is anything implementing
//!    [`Logger`], an error handler anything implementing [`ErrorHandler`].
//!    Where collaborators arrive untyped (as a [`Collaborator`] of unknown
//!    kind), [`capability::supports`] answers whether the required operation
//!    is present before the collaborator is trusted.
//!
//! 2. **Explicit no-op defaults.** [`NoOpLogger`], [`NoOpErrorHandler`] and
//!    [`NoOpEventDispatcher`] are ordinary values substituted by
//!    [`Collaborators::from_parts`]. There are no global instances.
//!
//! 3. **One error enum for client signals.** [`ClientError`] is the closed set
//!    of signals an [`ErrorHandler`] may receive.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `flagguard-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod capability;
pub mod collaborators;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod error_handler;
pub mod labels;
pub mod level;
pub mod logger;

// Re-export primary types for ergonomic imports.
pub use capability::{Capability, CapabilityDescriptor, Collaborator};
pub use collaborators::Collaborators;
pub use config::{ConfigError, DatafileSchemaVersion, ErrorPolicy, ValidatorConfig};
pub use dispatcher::{Event, EventDispatcher, HttpVerb, NoOpEventDispatcher};
pub use error::ClientError;
pub use error_handler::{ErrorHandler, NoOpErrorHandler, RaiseErrorHandler};
pub use labels::{field_label, INPUT_VARIABLES};
pub use level::{LogLevel, ParseLogLevelError};
pub use logger::{Logger, NoOpLogger, TracingLogger};
