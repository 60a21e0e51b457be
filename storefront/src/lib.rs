pub mod cart_line;
pub mod cart_snapshot;
pub mod cart_store;
pub mod checkout_state;
pub mod generate_sessions;
pub mod kiosk;
pub mod kiosk_action;
pub mod kiosk_command;
pub mod menu_client;
pub mod payment;
