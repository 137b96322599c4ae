//! # ActorClient Trait
//!
//! Typed client wrappers implement two methods (`inner` and `map_error`) and get every
//! request shape of the generic [`ResourceClient`] with errors already in their own type.
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    /// Maps plumbing failures, and entity errors that crossed the channel boxed, back into
    /// the resource's error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Snapshot of an entity, `None` if the id is unknown.
    #[instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Sends one action; the caller matches the result variant it expects.
    #[instrument(skip(self))]
    async fn perform(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, Self::Error> {
        debug!("Sending request");
        self.inner()
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}
