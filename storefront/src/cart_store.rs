//! The authoritative in-memory cart for one storefront session
use menu::menu_item::MenuItem;

use crate::cart_line::CartLine;
use crate::cart_snapshot::CartSnapshot;

/// Holds the session's cart lines in insertion order together with the
/// derived totals. Two items are the same line when their names match
/// exactly, so the cart never holds two lines for one item name.
///
/// A store is created empty by the kiosk that owns the session and is only
/// mutated through its own operations; totals are recomputed before any
/// mutation returns, so a read never observes stale totals.
pub struct CartStore {
    lines: Vec<CartLine>,
    total_amount: f64,
    total_count: u32,
}

impl CartStore {
    /// Creates an empty cart
    pub fn new() -> CartStore {
        CartStore {
            lines: Vec::new(),
            total_amount: 0.0,
            total_count: 0,
        }
    }

    /// Adds one unit of the item. If a line with the same name already
    /// exists its quantity grows by one, otherwise a new line is appended
    /// at the end. An equal-by-name different instance merges exactly like
    /// the same instance.
    pub fn add_item(&mut self, item: &MenuItem) {
        match self.position_of(item) {
            Some(index) => self.lines[index].increment(),
            None => self.lines.push(CartLine::new(item.clone())),
        }
        self.recompute_totals();
    }

    /// Removes one unit of the item. A quantity-1 line disappears entirely;
    /// removing an item that has no line is a no-op, not an error.
    pub fn remove_item(&mut self, item: &MenuItem) {
        if let Some(index) = self.position_of(item) {
            if self.lines[index].quantity() > 1 {
                self.lines[index].decrement();
            } else {
                self.lines.remove(index);
            }
            self.recompute_totals();
        }
    }

    /// Units of the item currently in the cart, 0 when it has no line
    pub fn quantity_of(&self, item: &MenuItem) -> u32 {
        match self.position_of(item) {
            Some(index) => self.lines[index].quantity(),
            None => 0,
        }
    }

    /// Resets the cart to the empty state. Called after a completed checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.recompute_totals();
    }

    /// Sum of price times quantity over all lines
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    /// Sum of quantities over all lines
    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// A consistent read-only view for the presentation side, reflecting
    /// every mutation that completed before this call
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::new(self.lines.clone(), self.total_amount, self.total_count)
    }

    // Linear scan by name. Carts are bounded by a single order, so no
    // index structure is kept.
    fn position_of(&self, item: &MenuItem) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.item().same_identity(item))
    }

    fn recompute_totals(&mut self) {
        self.total_amount = self.lines.iter().map(CartLine::subtotal).sum();
        self.total_count = self.lines.iter().map(CartLine::quantity).sum();
    }
}

impl Default for CartStore {
    fn default() -> Self {
        CartStore::new()
    }
}
