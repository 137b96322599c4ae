//! ActorEntity trait implementation for the Session domain type.
//!
//! Enables [`Session`] to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor). All synchronous rules live on
//! [`Session`] itself; this layer adds the tracker lifecycle around them.

use super::actions::{SessionAction, SessionActionResult};
use super::error::SessionError;
use super::tracker;
use crate::config::{ConfigError, SessionConfig};
use crate::framework::{ActorEntity, WeakResourceClient};
use crate::model::{Session, SessionCreate, SessionId};
use async_trait::async_trait;
use tracing::{debug, info};

/// Runtime dependencies injected into every session hook.
///
/// The handle is weak so that trackers spawned from it never keep the actor alive. The
/// config is validated on construction, so the estimate draw and the tracker interval
/// always get usable values.
#[derive(Clone)]
pub struct SessionContext {
    handle: WeakResourceClient<Session>,
    config: SessionConfig,
}

impl SessionContext {
    pub fn new(
        handle: WeakResourceClient<Session>,
        config: SessionConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { handle, config })
    }
}

#[async_trait]
impl ActorEntity for Session {
    type Id = SessionId;
    type Create = SessionCreate;
    type Action = SessionAction;
    type ActionResult = SessionActionResult;
    type Context = SessionContext;
    type Error = SessionError;

    fn from_create(id: SessionId, params: SessionCreate) -> Self {
        Self::new(id, params.customer)
    }

    /// Stops the tracker so a closed session never receives another tick.
    async fn on_delete(&mut self, _ctx: &SessionContext) -> Result<(), SessionError> {
        self.cancel_tracker();
        Ok(())
    }

    async fn on_shutdown(&mut self, _ctx: &SessionContext) {
        self.cancel_tracker();
    }

    /// Handles custom actions for the Session entity.
    ///
    /// # Actions
    /// - Cart edits delegate to the matching [`Session`] method and never fail.
    /// - `PlaceOrder`: places the order and spawns its tracker; fails with
    ///   `OrderInProgress` while the previous order is undelivered.
    /// - `AdvanceOrder`: one tracker step.
    async fn handle_action(
        &mut self,
        action: SessionAction,
        ctx: &SessionContext,
    ) -> Result<SessionActionResult, SessionError> {
        match action {
            SessionAction::AddItem(item) => Ok(SessionActionResult::AddItem(self.add_item(item))),
            SessionAction::RemoveItem(id) => {
                Ok(SessionActionResult::RemoveItem(self.remove_item(&id)))
            }
            SessionAction::UpdateQuantity { id, delta } => Ok(
                SessionActionResult::UpdateQuantity(self.update_quantity(&id, delta)),
            ),
            SessionAction::ClearCart => {
                self.clear_cart();
                Ok(SessionActionResult::ClearCart(()))
            }
            SessionAction::PlaceOrder => {
                let placed = {
                    let mut rng = rand::thread_rng();
                    self.place_order(ctx.config.estimate_range(), &mut rng)?
                        .cloned()
                };
                match &placed {
                    Some(order) => {
                        // the previous tracker (if any) ended with its delivered order
                        self.cancel_tracker();
                        self.tracker = Some(tracker::spawn_tracker(
                            ctx.handle.clone(),
                            self.id,
                            order.id.clone(),
                            ctx.config.tick_interval,
                        ));
                        info!(
                            session_id = %self.id,
                            order_id = %order.id,
                            total = order.total,
                            eta_minutes = order.estimated_minutes,
                            "Order placed"
                        );
                    }
                    None => debug!(session_id = %self.id, "Place ignored, cart is empty"),
                }
                Ok(SessionActionResult::PlaceOrder(placed))
            }
            SessionAction::AdvanceOrder(order_id) => {
                Ok(SessionActionResult::AdvanceOrder(self.advance_order(&order_id)))
            }
        }
    }
}
