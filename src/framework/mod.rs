//! Generic actor framework for resource management.
//!
//! Building blocks for actors that own a keyed collection of entities and mutate them only
//! through typed actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the entities and processes requests in order
//! - [`ResourceClient`] / [`WeakResourceClient`] - Owning and non-owning handles to an actor
//! - [`ActorClient`] - Shared `get`/`delete` for typed client wrappers
//! - [`FrameworkError`] - Errors raised by the plumbing
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::{ResourceClient, WeakResourceClient};
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
