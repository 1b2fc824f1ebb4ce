//! Cart Model

use super::menu_item::MenuItem;
use serde::{Deserialize, Serialize};

/// A menu item in the cart with its quantity
///
/// Invariants (maintained by the store, relied on by the order builder):
/// at most one entry per item id, and `quantity >= 1`; an entry whose
/// quantity drops to zero is removed, never kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartItem {
    /// A fresh entry for an item just added to the cart
    pub fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    /// Line total in the smallest LBP unit, exact integer arithmetic
    pub fn line_total(&self) -> i64 {
        self.item.price * self.quantity as i64
    }
}
