//! A placed order and its delivery status.
//!
//! An order is a snapshot: its lines and total are copied out of the cart at placement and
//! never change afterwards. Only `status` moves, one step per tracker tick.
use crate::model::CartLine;
use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::RangeInclusive;

/// Length of generated order tokens.
const ORDER_ID_LEN: usize = 9;

/// Type-safe identifier for orders: an unpredictable uppercase alphanumeric token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let token: String = (0..ORDER_ID_LEN)
            .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_uppercase())
            .collect();
        Self(token)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Placed")]
    Placed,
    #[serde(rename = "Preparing")]
    Preparing,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    #[serde(rename = "Delivered")]
    Delivered,
}

impl OrderStatus {
    pub const STEPS: [OrderStatus; 4] = [
        OrderStatus::Placed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// The status one tick later. `Delivered` maps to itself.
    pub fn next(self) -> Self {
        match self {
            OrderStatus::Placed => OrderStatus::Preparing,
            OrderStatus::Preparing => OrderStatus::OutForDelivery,
            OrderStatus::OutForDelivery => OrderStatus::Delivered,
            OrderStatus::Delivered => OrderStatus::Delivered,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Delivered
    }

    /// Position in the tracker (0 for `Placed` through 3 for `Delivered`).
    pub fn step_index(self) -> usize {
        self as usize
    }

    /// Fraction of the tracker bar that is filled.
    pub fn progress(self) -> f32 {
        self.step_index() as f32 / (Self::STEPS.len() - 1) as f32
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartLine>,
    pub total: f64,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    /// Estimated minutes to delivery, fixed when the order is placed.
    pub estimated_minutes: u32,
}

impl Order {
    /// Builds a freshly placed order from a cart snapshot.
    ///
    /// The id and the delivery estimate are drawn from `rng`; the estimate is uniform over
    /// `estimate`.
    pub fn place(
        items: Vec<CartLine>,
        total: f64,
        estimate: RangeInclusive<u32>,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            id: OrderId::generate(rng),
            items,
            total,
            status: OrderStatus::Placed,
            placed_at: Utc::now(),
            estimated_minutes: rng.gen_range(estimate),
        }
    }

    /// Moves the status one step forward. Returns `false` if already delivered.
    pub fn advance(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = self.status.next();
        true
    }

    pub fn is_delivered(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }
}
