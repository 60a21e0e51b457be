//! Checkout stub. Picking a payment method never talks to a real
//! processor: confirmation always arrives after a fixed delay, after which
//! the session's cart is cleared.
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cart_snapshot::CartSnapshot;
use crate::cart_store::CartStore;

const CONFIRMATION_DELAY: Duration = Duration::from_secs(2);

/// Payment options shown on the checkout screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Upi,
    Cash,
    Card,
}

impl PaymentMethod {
    /// Returns all the possible values of PaymentMethod
    pub fn values() -> Vec<PaymentMethod> {
        vec![PaymentMethod::Upi, PaymentMethod::Cash, PaymentMethod::Card]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
        }
    }
}

/// What the client walks away with after a confirmed checkout: the cart
/// as it was at confirmation time, and how it was paid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    method: PaymentMethod,
    order: CartSnapshot,
}

impl Receipt {
    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn order(&self) -> &CartSnapshot {
        &self.order
    }
}

/// Runs the stubbed checkout: waits the fixed confirmation delay, clears
/// the cart and returns the receipt. An empty cart has nothing to check
/// out and is left untouched.
pub fn checkout(cart: &mut CartStore, method: PaymentMethod) -> Option<Receipt> {
    checkout_with_delay(cart, method, CONFIRMATION_DELAY)
}

pub fn checkout_with_delay(
    cart: &mut CartStore,
    method: PaymentMethod,
    delay: Duration,
) -> Option<Receipt> {
    if cart.is_empty() {
        return None;
    }
    let order = cart.snapshot();
    thread::sleep(delay);
    cart.clear();
    Some(Receipt { method, order })
}
