//! Read-only view of a cart handed to the presentation side
use serde::{Deserialize, Serialize};

use crate::cart_line::CartLine;

/// A consistent picture of the cart after the most recently completed
/// mutation. Lines keep their insertion order for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSnapshot {
    lines: Vec<CartLine>,
    total_amount: f64,
    total_count: u32,
}

impl CartSnapshot {
    pub fn new(lines: Vec<CartLine>, total_amount: f64, total_count: u32) -> CartSnapshot {
        CartSnapshot {
            lines,
            total_amount,
            total_count,
        }
    }

    pub fn lines(&self) -> &Vec<CartLine> {
        &self.lines
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
