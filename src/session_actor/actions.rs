//! Custom actions for the Session actor.
//!
//! Every change to a [`Session`](crate::model::Session) goes through one of these, so the
//! actor's message loop is the only place a cart or order is ever mutated. They are handled
//! by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::{MenuItem, MenuItemId, Order, OrderId, TickOutcome};

/// Domain operations on a session beyond create/get/delete.
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Adds one unit of the item to the cart.
    AddItem(MenuItem),
    /// Drops the item's line from the cart. No-op if absent.
    RemoveItem(MenuItemId),
    /// Shifts the item's quantity by `delta`, never below one. No-op if absent.
    UpdateQuantity { id: MenuItemId, delta: i32 },
    ClearCart,
    /// Turns the cart into the active order and starts its tracker.
    ///
    /// # Errors
    /// `OrderInProgress` if the current order has not been delivered yet.
    PlaceOrder,
    /// One tracker tick for the given order.
    AdvanceOrder(OrderId),
}

/// Results from SessionActions - variants match 1:1 with SessionAction
#[derive(Debug, Clone)]
pub enum SessionActionResult {
    /// New quantity of the line that was added to.
    AddItem(u32),
    /// Whether a line was removed.
    RemoveItem(bool),
    /// New quantity, or `None` if the item was not in the cart.
    UpdateQuantity(Option<u32>),
    ClearCart(()),
    /// The placed order, or `None` for an empty cart.
    PlaceOrder(Option<Order>),
    AdvanceOrder(TickOutcome),
}
