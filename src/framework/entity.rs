//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource (here: a customer `Session`) implements
//! to be managed by the generic [`ResourceActor`](crate::framework::ResourceActor).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::on_shutdown`]
//!
//! You do **not** need to implement these unless you want to customize behavior.
//! The defaults do nothing.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they may talk to other actors. The `Context` type is
/// injected into every hook by `run()`, which lets an entity receive handles that only
/// exist once the actor has been created (for example a weak handle back to its own actor).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum of resource-specific operations (e.g. `AddItem`, `PlaceOrder`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than per action; clients match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its freshly assigned id and the create payload.
    ///
    /// Creation cannot fail: payloads are validated before they reach the actor.
    fn from_create(id: Self::Id, params: Self::Create) -> Self;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for every entity still in the store when the actor loop ends.
    async fn on_shutdown(&mut self, _ctx: &Self::Context) {}

    // --- Action Handler (Async) ---

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
