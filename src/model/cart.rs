//! Shopping cart: one line per menu item, quantities never below one.

use crate::model::{MenuItem, MenuItemId};
use serde::{Deserialize, Serialize};

/// A menu item and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn id(&self) -> &MenuItemId {
        &self.item.id
    }

    /// Price of this line (`price * quantity`).
    pub fn subtotal(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }
}

/// Ordered cart lines.
///
/// Invariants: item ids are unique across lines and every quantity is at least 1. Every
/// mutator below preserves both; none of them can fail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, id: &MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Adds one of `item`, returning the line's new quantity.
    pub fn add_item(&mut self, item: MenuItem) -> u32 {
        match self.lines.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine { item, quantity: 1 });
                1
            }
        }
    }

    /// Removes the line for `id`. Returns whether a line was removed.
    pub fn remove_item(&mut self, id: &MenuItemId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        self.lines.len() != before
    }

    /// Shifts the quantity of `id` by `delta`, clamped to at least 1.
    ///
    /// Returns the new quantity, or `None` if the item is not in the cart. Dropping a line
    /// entirely is [`Cart::remove_item`]'s job.
    pub fn update_quantity(&mut self, id: &MenuItemId, delta: i32) -> Option<u32> {
        let line = self.lines.iter_mut().find(|line| line.id() == id)?;
        let shifted = i64::from(line.quantity) + i64::from(delta);
        line.quantity = shifted.clamp(1, i64::from(u32::MAX)) as u32;
        Some(line.quantity)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price * quantity` over all lines, computed on every call.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Empties the cart, handing back its lines.
    pub(crate) fn take_lines(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }
}
