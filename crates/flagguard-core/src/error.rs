//! # Error Types — Client Error Signals
//!
//! The closed set of signals delivered to an [`ErrorHandler`] when input to
//! the client is rejected. All errors use `thiserror` for derive-based
//! `Display` and `Error` implementations; the `Display` text is the message
//! the client logs.
//!
//! [`ErrorHandler`]: crate::error_handler::ErrorHandler

use thiserror::Error;

/// Error signal raised by the client on malformed input or collaborators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The `attributes` argument was neither absent nor a mapping.
    #[error("Provided attributes are in an invalid format.")]
    InvalidAttributeFormat,

    /// The `event_tags` argument was neither absent nor a mapping.
    #[error("Provided event tags are in an invalid format.")]
    InvalidEventTagFormat,

    /// The supplied logger does not expose `log`.
    #[error("Provided logger is in an invalid format.")]
    InvalidLogger,

    /// The supplied error handler does not expose `handle_error`.
    #[error("Provided error_handler is in an invalid format.")]
    InvalidErrorHandler,

    /// The supplied event dispatcher does not expose `dispatch_event`.
    #[error("Provided event_dispatcher is in an invalid format.")]
    InvalidEventDispatcher,
}

impl ClientError {
    /// Stable name of the signal, as seen by host applications.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAttributeFormat => "InvalidAttributeFormatError",
            Self::InvalidEventTagFormat => "InvalidEventTagFormatError",
            Self::InvalidLogger => "InvalidLoggerError",
            Self::InvalidErrorHandler => "InvalidErrorHandlerError",
            Self::InvalidEventDispatcher => "InvalidEventDispatcherError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_log_message() {
        assert_eq!(
            ClientError::InvalidAttributeFormat.to_string(),
            "Provided attributes are in an invalid format."
        );
        assert_eq!(
            ClientError::InvalidEventTagFormat.to_string(),
            "Provided event tags are in an invalid format."
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ClientError::InvalidAttributeFormat.kind(), "InvalidAttributeFormatError");
        assert_eq!(ClientError::InvalidEventTagFormat.kind(), "InvalidEventTagFormatError");
        assert_eq!(ClientError::InvalidLogger.kind(), "InvalidLoggerError");
    }

    #[test]
    fn test_every_signal_has_distinct_kind() {
        let all = [
            ClientError::InvalidAttributeFormat,
            ClientError::InvalidEventTagFormat,
            ClientError::InvalidLogger,
            ClientError::InvalidErrorHandler,
            ClientError::InvalidEventDispatcher,
        ];
        let kinds: std::collections::BTreeSet<_> = all.iter().map(ClientError::kind).collect();
        assert_eq!(kinds.len(), all.len());
        for signal in &all {
            assert!(signal.kind().ends_with("Error"));
            assert!(signal.to_string().starts_with("Provided "));
        }
    }
}
