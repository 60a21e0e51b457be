pub mod catalog;
pub mod logger;
pub mod service;
pub mod messages {
    pub mod menu_request;
    pub mod message;
}
