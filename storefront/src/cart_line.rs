//! One (item, quantity) pairing in a session's cart
use menu::menu_item::MenuItem;
use serde::{Deserialize, Serialize};

/// Pairs a menu item with how many units of it the client asked for.
/// A line always holds at least one unit; dropping to zero removes the
/// line from the cart instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    item: MenuItem,
    quantity: u32,
}

impl CartLine {
    /// Creates a new line with a single unit of the given item
    pub fn new(item: MenuItem) -> CartLine {
        CartLine { item, quantity: 1 }
    }

    /// To obtain the item of this line
    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    /// To obtain the units of this line
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// This line's contribution to the cart total
    pub fn subtotal(&self) -> f64 {
        self.item.price() * self.quantity as f64
    }

    pub(crate) fn increment(&mut self) {
        self.quantity += 1;
    }

    pub(crate) fn decrement(&mut self) {
        self.quantity -= 1;
    }
}
