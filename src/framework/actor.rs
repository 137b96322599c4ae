//! # Generic Actor Server
//!
//! The `ResourceActor` owns every entity of one type and processes requests for them
//! sequentially. Exclusive ownership inside a single task is what keeps mutations atomic:
//! no request ever observes another request's half-applied change.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, Response};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This is the "server" half. It owns the `store` and the receiving end of the channel.
/// There is no `Mutex` around the store: each message is handled to completion before the
/// next one is received.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: build the entity context (it may hold a weak handle from
///    [`ResourceClient::downgrade`]).
/// 3. **Run**: spawn `actor.run(context)` on the runtime.
///
/// The loop ends on [`ResourceClient::shutdown`] or once every strong [`ResourceClient`]
/// has been dropped. Remaining entities then get their [`ActorEntity::on_shutdown`] hook.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the channel capacity and must be non-zero; when full, client calls
    /// wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // "Session" rather than "khana_session::model::session::Session"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
            entity_type,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until the channel is closed and drained.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => self.create(params, respond_to),
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let result = self.delete(&id, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    let result = self.act(&id, action, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Shutdown => {
                    info!(entity_type, "Shutdown requested");
                    // recv() keeps yielding what was queued before this, then None
                    self.receiver.close();
                }
            }
        }

        for item in self.store.values_mut() {
            item.on_shutdown(&context).await;
        }
        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn create(&mut self, params: T::Create, respond_to: Response<T::Id>) {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;
        debug!(entity_type = self.entity_type, %id, ?params, "Create");

        self.store.insert(id.clone(), T::from_create(id.clone(), params));
        info!(entity_type = self.entity_type, %id, size = self.store.len(), "Created");
        let _ = respond_to.send(Ok(id));
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let entity_type = self.entity_type;
        let Some(item) = self.store.get_mut(id) else {
            warn!(entity_type, %id, "Delete of unknown id");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        if let Err(e) = item.on_delete(context).await {
            warn!(entity_type, %id, error = %e, "on_delete failed, entity kept");
            return Err(FrameworkError::entity(e));
        }
        self.store.remove(id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(())
    }

    async fn act(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let entity_type = self.entity_type;
        let Some(item) = self.store.get_mut(id) else {
            warn!(entity_type, %id, ?action, "Action on unknown id");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        debug!(entity_type, %id, ?action, "Action");
        item.handle_action(action, context).await.map_err(|e| {
            warn!(entity_type, %id, error = %e, "Action failed");
            FrameworkError::entity(e)
        })
    }
}
