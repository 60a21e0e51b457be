//! States of a kiosk session's checkout flow
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CheckoutState {
    Browsing,
    AwaitingConfirmation,
    Confirmed,
}
