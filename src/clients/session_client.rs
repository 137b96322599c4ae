//! # Session Client
//!
//! The handle views hold for a customer session. It wraps a `ResourceClient<Session>` and
//! turns each cart/order operation into a typed request and a typed answer.
//!
//! Business errors raised inside the actor come back as their original [`SessionError`];
//! only plumbing failures become `ActorCommunicationError`.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{
    Cart, MenuItem, MenuItemId, Order, OrderId, Session, SessionCreate, SessionId, TickOutcome,
};
use crate::session_actor::{SessionAction, SessionActionResult, SessionError};
use async_trait::async_trait;
use tracing::{info, instrument};

/// Client for interacting with the Session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<Session>,
}

#[async_trait]
impl ActorClient<Session> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &ResourceClient<Session> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => SessionError::NotFound(id),
            FrameworkError::Entity(inner) => match inner.downcast::<SessionError>() {
                Ok(err) => *err,
                Err(other) => SessionError::ActorCommunicationError(other.to_string()),
            },
            other => SessionError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn mismatch(action: &str) -> SessionError {
    SessionError::ActorCommunicationError(format!("{action} returned a mismatched result"))
}

impl SessionClient {
    pub fn new(inner: ResourceClient<Session>) -> Self {
        Self { inner }
    }

    /// Opens a new session with an empty cart and no order.
    #[instrument(skip(self))]
    pub async fn open_session(&self, customer: Option<String>) -> Result<SessionId, SessionError> {
        let id = self
            .inner
            .create(SessionCreate { customer })
            .await
            .map_err(Self::map_error)?;
        info!(session_id = %id, "Session opened");
        Ok(id)
    }

    /// Closes the session and stops its tracker.
    #[instrument(skip(self))]
    pub async fn close_session(&self, id: SessionId) -> Result<(), SessionError> {
        self.delete(id).await?;
        info!(session_id = %id, "Session closed");
        Ok(())
    }

    /// Snapshot of the whole session.
    pub async fn session(&self, id: SessionId) -> Result<Session, SessionError> {
        self.get(id)
            .await?
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    pub async fn cart(&self, id: SessionId) -> Result<Cart, SessionError> {
        Ok(self.session(id).await?.cart)
    }

    pub async fn cart_total(&self, id: SessionId) -> Result<f64, SessionError> {
        Ok(self.session(id).await?.cart_total())
    }

    /// Number of units in the cart (the badge count).
    pub async fn cart_count(&self, id: SessionId) -> Result<u32, SessionError> {
        Ok(self.session(id).await?.cart.item_count())
    }

    pub async fn active_order(&self, id: SessionId) -> Result<Option<Order>, SessionError> {
        Ok(self.session(id).await?.active_order)
    }

    /// Adds one unit of `item`. Returns the line's new quantity.
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn add_item(&self, id: SessionId, item: MenuItem) -> Result<u32, SessionError> {
        match self.perform(id, SessionAction::AddItem(item)).await? {
            SessionActionResult::AddItem(quantity) => Ok(quantity),
            _ => Err(mismatch("AddItem")),
        }
    }

    /// Removes the item's line. Returns whether anything was removed.
    #[instrument(skip(self))]
    pub async fn remove_item(
        &self,
        id: SessionId,
        item_id: MenuItemId,
    ) -> Result<bool, SessionError> {
        match self.perform(id, SessionAction::RemoveItem(item_id)).await? {
            SessionActionResult::RemoveItem(removed) => Ok(removed),
            _ => Err(mismatch("RemoveItem")),
        }
    }

    /// Shifts the item's quantity by `delta` (never below one).
    ///
    /// Returns the new quantity, or `None` if the item is not in the cart.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        id: SessionId,
        item_id: MenuItemId,
        delta: i32,
    ) -> Result<Option<u32>, SessionError> {
        let action = SessionAction::UpdateQuantity { id: item_id, delta };
        match self.perform(id, action).await? {
            SessionActionResult::UpdateQuantity(quantity) => Ok(quantity),
            _ => Err(mismatch("UpdateQuantity")),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self, id: SessionId) -> Result<(), SessionError> {
        match self.perform(id, SessionAction::ClearCart).await? {
            SessionActionResult::ClearCart(()) => Ok(()),
            _ => Err(mismatch("ClearCart")),
        }
    }

    /// Places the cart as an order and starts tracking it.
    ///
    /// Returns `None` if the cart was empty.
    ///
    /// # Errors
    /// [`SessionError::OrderInProgress`] while the previous order is not yet delivered.
    #[instrument(skip(self))]
    pub async fn place_order(&self, id: SessionId) -> Result<Option<Order>, SessionError> {
        match self.perform(id, SessionAction::PlaceOrder).await? {
            SessionActionResult::PlaceOrder(order) => Ok(order),
            _ => Err(mismatch("PlaceOrder")),
        }
    }

    /// Applies one status step by hand, as the tracker would on its tick.
    #[instrument(skip(self))]
    pub async fn advance_order(
        &self,
        id: SessionId,
        order_id: OrderId,
    ) -> Result<TickOutcome, SessionError> {
        match self.perform(id, SessionAction::AdvanceOrder(order_id)).await? {
            SessionActionResult::AdvanceOrder(outcome) => Ok(outcome),
            _ => Err(mismatch("AdvanceOrder")),
        }
    }
}
