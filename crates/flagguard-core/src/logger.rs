//! # Logger Collaborator
//!
//! The diagnostic channel validators report through. Host applications plug
//! in their own sink; [`TracingLogger`] forwards into `tracing` and
//! [`NoOpLogger`] discards everything.

use crate::level::LogLevel;

/// A sink for human-readable diagnostics.
pub trait Logger: Send + Sync {
    /// Record `message` at `level`.
    fn log(&self, level: LogLevel, message: &str);
}

/// Logger that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}
}

/// Logger that emits each message as a `tracing` event at the matching level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "flagguard", "{message}"),
            LogLevel::Info => tracing::info!(target: "flagguard", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "flagguard", "{message}"),
            LogLevel::Error => tracing::error!(target: "flagguard", "{message}"),
        }
    }
}
