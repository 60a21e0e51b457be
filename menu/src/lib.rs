pub mod category;
pub mod fallback;
pub mod menu_item;
