//! # Error Handler Collaborator
//!
//! Decides the fate of a [`ClientError`] signal. Returning `Ok(())` swallows
//! the signal; returning `Err` propagates it to the caller of the validator.

use crate::error::ClientError;

/// Pluggable policy for client error signals.
pub trait ErrorHandler: Send + Sync {
    /// Handle `error`, either swallowing it or propagating it.
    fn handle_error(&self, error: ClientError) -> Result<(), ClientError>;
}

/// Handler that swallows every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpErrorHandler;

impl ErrorHandler for NoOpErrorHandler {
    fn handle_error(&self, _error: ClientError) -> Result<(), ClientError> {
        Ok(())
    }
}

/// Handler that propagates every signal unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct RaiseErrorHandler;

impl ErrorHandler for RaiseErrorHandler {
    fn handle_error(&self, error: ClientError) -> Result<(), ClientError> {
        Err(error)
    }
}
