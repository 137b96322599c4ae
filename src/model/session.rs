//! A customer's ordering session: their cart and their current order.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait
//! (see [`session_actor::entity`](crate::session_actor::entity)), so every session lives
//! inside the session actor and is only mutated through serialized actions.
//!
//! The methods here are the synchronous core. They never fail on bad ids: removing or
//! updating an item that is not in the cart does nothing.
use crate::model::{Cart, MenuItem, MenuItemId, Order, OrderId, OrderStatus};
use crate::session_actor::tracker::TrackerHandle;
use crate::session_actor::SessionError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::RangeInclusive;

/// Type-safe identifier for sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

/// Payload for opening a session.
#[derive(Debug, Clone, Default)]
pub struct SessionCreate {
    /// Display name for logs, if the front end knows one.
    pub customer: Option<String>,
}

/// What a single tracker tick did to the active order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The order moved one step; carries the new status.
    Advanced(OrderStatus),
    /// The order was already delivered; nothing changed.
    AlreadyDelivered,
    /// The session has no active order with that id.
    Stale,
}

impl TickOutcome {
    /// Whether the tracker that produced this tick should keep running.
    pub fn keeps_ticking(self) -> bool {
        matches!(self, TickOutcome::Advanced(status) if !status.is_terminal())
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub customer: Option<String>,
    pub cart: Cart,
    pub active_order: Option<Order>,
    pub(crate) tracker: Option<TrackerHandle>,
}

impl Session {
    pub fn new(id: SessionId, customer: Option<String>) -> Self {
        Self {
            id,
            customer,
            cart: Cart::new(),
            active_order: None,
            tracker: None,
        }
    }

    pub fn add_item(&mut self, item: MenuItem) -> u32 {
        self.cart.add_item(item)
    }

    pub fn remove_item(&mut self, id: &MenuItemId) -> bool {
        self.cart.remove_item(id)
    }

    pub fn update_quantity(&mut self, id: &MenuItemId, delta: i32) -> Option<u32> {
        self.cart.update_quantity(id, delta)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }

    /// Turns the cart into the active order and empties the cart.
    ///
    /// - Empty cart: returns `Ok(None)` and changes nothing.
    /// - An order that is not yet delivered: `Err(OrderInProgress)`, nothing changes.
    /// - Otherwise the new order replaces any delivered one and is returned.
    pub fn place_order(
        &mut self,
        estimate: RangeInclusive<u32>,
        rng: &mut impl Rng,
    ) -> Result<Option<&Order>, SessionError> {
        if self.cart.is_empty() {
            return Ok(None);
        }
        if let Some(current) = self.active_order.as_ref().filter(|o| !o.is_delivered()) {
            return Err(SessionError::OrderInProgress(current.id.clone()));
        }

        let total = self.cart.total();
        let lines = self.cart.take_lines();
        let order = Order::place(lines, total, estimate, rng);
        Ok(Some(&*self.active_order.insert(order)))
    }

    /// Applies one tracker tick to the order identified by `order_id`.
    pub fn advance_order(&mut self, order_id: &OrderId) -> TickOutcome {
        match self.active_order.as_mut() {
            Some(order) if &order.id == order_id => {
                if order.advance() {
                    TickOutcome::Advanced(order.status)
                } else {
                    TickOutcome::AlreadyDelivered
                }
            }
            _ => TickOutcome::Stale,
        }
    }

    /// Whether a tracker task is still stepping the active order.
    pub fn is_tracking(&self) -> bool {
        self.tracker.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stops the tracker task, if one is running.
    pub(crate) fn cancel_tracker(&mut self) {
        if let Some(handle) = self.tracker.take() {
            handle.abort();
        }
    }
}
