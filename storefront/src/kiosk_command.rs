//! Messages understood by a kiosk actor. Routing every cart mutation
//! through the actor's mailbox is what serializes access to the session's
//! CartStore.
use actix::Message;
use serde::{Deserialize, Serialize};

use crate::cart_snapshot::CartSnapshot;
use crate::payment::{PaymentMethod, Receipt};

/// Cart mutations issued by the presentation side.
/// AddByName: put one unit of the named item in the cart
/// RemoveByName: take one unit of the named item out of the cart
#[derive(Debug, Clone, Message, Serialize, Deserialize)]
#[rtype(result = "()")]
pub enum KioskCommand {
    AddByName { name: String },
    RemoveByName { name: String },
}

/// Asks the kiosk for a consistent view of its cart.
#[derive(Message)]
#[rtype(result = "CartSnapshot")]
pub struct ShowCart;

/// Runs the stubbed checkout with the chosen payment method.
/// Answers the receipt, or None when the cart was empty.
#[derive(Message)]
#[rtype(result = "Option<Receipt>")]
pub struct CheckoutCommand {
    pub method: PaymentMethod,
}
