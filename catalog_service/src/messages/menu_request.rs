use menu::category::Category;
use rand::Rng;

use super::message::Request;
use crate::catalog;

const AVAILABILITY_PROBABILITY: f64 = 0.9;

/// Represents a `menu` request for one section of the catalog.
pub struct MenuRequest {
    category: Category,
}

impl MenuRequest {
    /// Creates a new `MenuRequest` for the given section.
    pub fn new(category: Category) -> Self {
        MenuRequest { category }
    }
}

impl Request for MenuRequest {
    /// Returns the menu section the request is about.
    fn category(&self) -> Category {
        self.category
    }

    /// Returns the request type as a string.
    fn type_to_string(&self) -> String {
        "menu".to_string()
    }

    /// Answers the section's records, or an outage.
    ///
    /// If a random number generated falls below the
    /// `AVAILABILITY_PROBABILITY`, the response is
    /// `items\n{json array of records}`. Otherwise it is
    /// `unavailable\n{label}`, simulating the store being unreachable so
    /// that clients exercise their fallback menu.
    fn process(&self) -> Vec<u8> {
        let available = rand::thread_rng().gen_bool(AVAILABILITY_PROBABILITY);
        if available {
            match serde_json::to_string(&catalog::records_for(self.category)) {
                Ok(json) => format!("items\n{}", json).into_bytes(),
                Err(_) => format!("unavailable\n{}", self.category.label()).into_bytes(),
            }
        } else {
            format!("unavailable\n{}", self.category.label()).into_bytes()
        }
    }
}
