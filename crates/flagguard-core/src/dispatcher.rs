//! # Event Dispatcher Collaborator
//!
//! Delivers impression and conversion events built by the client. Concrete
//! transport is the host application's concern; flagguard only checks that a
//! dispatcher is present before it is trusted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP method used to deliver an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    /// `GET` with parameters in the query string.
    Get,
    /// `POST` with parameters in the body.
    Post,
}

/// An outbound event ready for dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Endpoint the event is sent to.
    pub url: String,
    /// Request method.
    pub http_verb: HttpVerb,
    /// Event payload.
    pub params: Value,
    /// Extra request headers.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

/// Pluggable event transport.
pub trait EventDispatcher: Send + Sync {
    /// Deliver `event`.
    fn dispatch_event(&self, event: &Event);
}

/// Dispatcher that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpEventDispatcher;

impl EventDispatcher for NoOpEventDispatcher {
    fn dispatch_event(&self, _event: &Event) {}
}
