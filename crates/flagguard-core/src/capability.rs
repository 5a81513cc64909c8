//! # Capability Checks
//!
//! Host applications hand collaborators to the client without a static
//! guarantee of which role they fill. A [`Collaborator`] carries the
//! collaborator together with the trait it implements, and [`supports`]
//! answers whether it exposes a required [`Capability`] before it is used.
//!
//! An absent collaborator never supports anything.

use std::fmt;
use std::sync::Arc;

use crate::dispatcher::EventDispatcher;
use crate::error_handler::ErrorHandler;
use crate::logger::Logger;

/// A named operation a collaborator must expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `handle_error(error)`.
    HandleError,
    /// `dispatch_event(event)`.
    DispatchEvent,
    /// `log(level, message)`.
    Log,
}

impl Capability {
    /// Name of the operation.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::HandleError => "handle_error",
            Self::DispatchEvent => "dispatch_event",
            Self::Log => "log",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operation())
    }
}

/// A collaborator of any supported role.
#[derive(Clone)]
pub enum Collaborator {
    /// Implements [`Logger`].
    Logger(Arc<dyn Logger>),
    /// Implements [`ErrorHandler`].
    ErrorHandler(Arc<dyn ErrorHandler>),
    /// Implements [`EventDispatcher`].
    EventDispatcher(Arc<dyn EventDispatcher>),
}

impl Collaborator {
    /// Operations this collaborator exposes.
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Self::Logger(_) => &[Capability::Log],
            Self::ErrorHandler(_) => &[Capability::HandleError],
            Self::EventDispatcher(_) => &[Capability::DispatchEvent],
        }
    }

    /// The collaborator as a logger, if it is one.
    pub fn into_logger(self) -> Option<Arc<dyn Logger>> {
        match self {
            Self::Logger(logger) => Some(logger),
            _ => None,
        }
    }

    /// The collaborator as an error handler, if it is one.
    pub fn into_error_handler(self) -> Option<Arc<dyn ErrorHandler>> {
        match self {
            Self::ErrorHandler(handler) => Some(handler),
            _ => None,
        }
    }

    /// The collaborator as an event dispatcher, if it is one.
    pub fn into_event_dispatcher(self) -> Option<Arc<dyn EventDispatcher>> {
        match self {
            Self::EventDispatcher(dispatcher) => Some(dispatcher),
            _ => None,
        }
    }
}

impl fmt::Debug for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = match self {
            Self::Logger(_) => "Logger",
            Self::ErrorHandler(_) => "ErrorHandler",
            Self::EventDispatcher(_) => "EventDispatcher",
        };
        f.debug_tuple("Collaborator").field(&role).finish()
    }
}

/// Returns true iff `collaborator` is present and exposes `capability`.
pub fn supports(collaborator: Option<&Collaborator>, capability: Capability) -> bool {
    collaborator.is_some_and(|c| c.capabilities().contains(&capability))
}

/// Returns true iff `collaborator` can be used as a logger.
pub fn logger_valid(collaborator: Option<&Collaborator>) -> bool {
    supports(collaborator, Capability::Log)
}

/// Returns true iff `collaborator` can be used as an error handler.
pub fn error_handler_valid(collaborator: Option<&Collaborator>) -> bool {
    supports(collaborator, Capability::HandleError)
}

/// Returns true iff `collaborator` can be used as an event dispatcher.
pub fn event_dispatcher_valid(collaborator: Option<&Collaborator>) -> bool {
    supports(collaborator, Capability::DispatchEvent)
}

/// A collaborator paired with the operation it is required to support.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityDescriptor<'a> {
    /// The collaborator under test, if one was supplied.
    pub collaborator: Option<&'a Collaborator>,
    /// The operation it must expose.
    pub required: Capability,
}

impl<'a> CapabilityDescriptor<'a> {
    /// Pair `collaborator` with `required`.
    pub fn new(collaborator: Option<&'a Collaborator>, required: Capability) -> Self {
        Self {
            collaborator,
            required,
        }
    }

    /// Whether the collaborator exposes the required operation.
    pub fn is_satisfied(&self) -> bool {
        supports(self.collaborator, self.required)
    }
}
