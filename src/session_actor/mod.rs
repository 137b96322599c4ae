//! # Session Actor
//!
//! The resource actor that owns every open [`Session`] and serializes all cart and order
//! changes through its message loop.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Session`]
//! - [`error`] - [`SessionError`] type for type-safe error handling
//! - [`actions`] - [`SessionAction`] and [`SessionActionResult`]
//! - [`tracker`] - the per-order background task that advances the status
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = session_actor::new(32);
//! let context = SessionContext::new(client.downgrade(), SessionConfig::default())?;
//! tokio::spawn(actor.run(context));
//! let sessions = SessionClient::new(client);
//! ```
//!
//! The context holds only a weak handle, so the actor still stops once the last
//! [`SessionClient`](crate::clients::SessionClient) is dropped.

pub mod actions;
pub mod entity;
pub mod error;
pub mod tracker;

pub use actions::*;
pub use entity::SessionContext;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Session;

/// Creates a new Session actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Session>, ResourceClient<Session>) {
    ResourceActor::new(buffer_size)
}
