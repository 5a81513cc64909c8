//! # Collaborator Bundle
//!
//! The logger, error handler and event dispatcher a client runs with.
//! [`Collaborators::from_parts`] is the boundary where untyped collaborators
//! are accepted: each supplied one must support its role's capability, and
//! each missing one is replaced by its no-op implementation.

use std::fmt;
use std::sync::Arc;

use crate::capability::{supports, Capability, Collaborator};
use crate::dispatcher::{EventDispatcher, NoOpEventDispatcher};
use crate::error::ClientError;
use crate::error_handler::{ErrorHandler, NoOpErrorHandler};
use crate::logger::{Logger, NoOpLogger};

/// The collaborators a client reports through.
#[derive(Clone)]
pub struct Collaborators {
    /// Diagnostic sink.
    pub logger: Arc<dyn Logger>,
    /// Error signal policy.
    pub error_handler: Arc<dyn ErrorHandler>,
    /// Event transport.
    pub event_dispatcher: Arc<dyn EventDispatcher>,
}

impl Collaborators {
    /// Validate supplied collaborators and fill in no-op defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidLogger`], [`ClientError::InvalidErrorHandler`]
    /// or [`ClientError::InvalidEventDispatcher`] if a supplied collaborator
    /// does not expose the operation its role requires.
    pub fn from_parts(
        logger: Option<Collaborator>,
        error_handler: Option<Collaborator>,
        event_dispatcher: Option<Collaborator>,
    ) -> Result<Self, ClientError> {
        let logger: Arc<dyn Logger> = match logger {
            None => {
                tracing::debug!("no logger supplied; using no-op logger");
                Arc::new(NoOpLogger)
            }
            Some(c) => accept(c, Capability::Log, ClientError::InvalidLogger)?
                .into_logger()
                .ok_or(ClientError::InvalidLogger)?,
        };

        let error_handler: Arc<dyn ErrorHandler> = match error_handler {
            None => {
                tracing::debug!("no error handler supplied; using no-op error handler");
                Arc::new(NoOpErrorHandler)
            }
            Some(c) => accept(c, Capability::HandleError, ClientError::InvalidErrorHandler)?
                .into_error_handler()
                .ok_or(ClientError::InvalidErrorHandler)?,
        };

        let event_dispatcher: Arc<dyn EventDispatcher> = match event_dispatcher {
            None => {
                tracing::debug!("no event dispatcher supplied; using no-op event dispatcher");
                Arc::new(NoOpEventDispatcher)
            }
            Some(c) => accept(c, Capability::DispatchEvent, ClientError::InvalidEventDispatcher)?
                .into_event_dispatcher()
                .ok_or(ClientError::InvalidEventDispatcher)?,
        };

        Ok(Self {
            logger,
            error_handler,
            event_dispatcher,
        })
    }
}

fn accept(
    collaborator: Collaborator,
    required: Capability,
    rejection: ClientError,
) -> Result<Collaborator, ClientError> {
    if supports(Some(&collaborator), required) {
        Ok(collaborator)
    } else {
        tracing::warn!(
            collaborator = ?collaborator,
            required = %required,
            "collaborator rejected: missing required operation"
        );
        Err(rejection)
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            logger: Arc::new(NoOpLogger),
            error_handler: Arc::new(NoOpErrorHandler),
            event_dispatcher: Arc::new(NoOpEventDispatcher),
        }
    }
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handler::RaiseErrorHandler;
    use crate::logger::TracingLogger;

    #[test]
    fn test_all_absent_uses_defaults() {
        let c = Collaborators::from_parts(None, None, None).unwrap();
        assert!(c
            .error_handler
            .handle_error(ClientError::InvalidAttributeFormat)
            .is_ok());
    }

    #[test]
    fn test_supplied_collaborators_are_kept() {
        let c = Collaborators::from_parts(
            Some(Collaborator::Logger(Arc::new(TracingLogger))),
            Some(Collaborator::ErrorHandler(Arc::new(RaiseErrorHandler))),
            None,
        )
        .unwrap();
        assert_eq!(
            c.error_handler.handle_error(ClientError::InvalidEventTagFormat),
            Err(ClientError::InvalidEventTagFormat)
        );
    }

    #[test]
    fn test_wrong_role_is_rejected() {
        let err = Collaborators::from_parts(
            Some(Collaborator::ErrorHandler(Arc::new(RaiseErrorHandler))),
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err, ClientError::InvalidLogger);

        let err = Collaborators::from_parts(
            None,
            Some(Collaborator::Logger(Arc::new(TracingLogger))),
            None,
        )
        .unwrap_err();
        assert_eq!(err, ClientError::InvalidErrorHandler);

        let err = Collaborators::from_parts(
            None,
            None,
            Some(Collaborator::Logger(Arc::new(TracingLogger))),
        )
        .unwrap_err();
        assert_eq!(err, ClientError::InvalidEventDispatcher);
    }
}
