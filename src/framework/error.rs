//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, as opposed to the entity's own error type
//! which travels boxed inside [`FrameworkError::Entity`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameworkError {
    /// The request never reached the actor: its channel is closed or shutting down.
    #[error("actor is not accepting requests")]
    Closed,
    /// The actor took the request but went away before answering.
    #[error("actor stopped before replying")]
    NoReply,
    #[error("no entity with id {0}")]
    NotFound(String),
    /// The entity's own hook or action failed; downcast to recover the typed error.
    #[error("{0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    pub(crate) fn entity<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
        Self::Entity(Box::new(e))
    }
}
