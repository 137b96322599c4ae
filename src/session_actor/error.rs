//! Error types for the Session actor.

use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur during session operations.
///
/// Cart operations never fail on their own; the only business rule that can reject a
/// request is placing a second order while one is still on its way.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// The requested session was not found (never opened, or already closed).
    #[error("Session not found: {0}")]
    NotFound(String),

    /// An order is already placed and not yet delivered.
    #[error("Order {0} is still in progress")]
    OrderInProgress(OrderId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SessionError {
    fn from(msg: String) -> Self {
        SessionError::ActorCommunicationError(msg)
    }
}
