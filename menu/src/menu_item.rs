//! Represents an item offered by the coffee shop and its document-store form
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// An item as stored in the remote catalog. Numeric fields travel as text,
/// so they are only parsed when the record is turned into a [`MenuItem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemRecord {
    pub name: String,
    pub price: String,
    pub size: String,
    pub calories: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub ingredients: String,
    pub available: bool,
}

/// An immutable, fully parsed menu item. The name acts as the identity key
/// for cart merging (case-sensitive, exact match).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,
    price: f64,
    size_label: String,
    calories: u32,
    category: Category,
    description: String,
    image: String,
    ingredients: String,
    available: bool,
}

/// Parses a text price from the catalog. An empty or malformed price counts
/// as zero towards cart totals instead of failing the whole item.
pub fn parse_price(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Same degrade-to-zero handling for text calorie counts.
pub fn parse_calories(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

impl MenuItem {
    /// Creates a new menu item
    /// # Arguments
    /// * `name` - The display name, also the cart identity key
    /// * `price` - Price in the shop's currency
    /// * `size_label` - Serving size as shown to the client
    /// * `calories` - Calorie count for the serving
    /// * `category` - The menu section this item belongs to
    /// # Returns
    /// * A MenuItem with empty description, image and ingredients
    pub fn new(
        name: &str,
        price: f64,
        size_label: &str,
        calories: u32,
        category: Category,
    ) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            price,
            size_label: size_label.to_string(),
            calories,
            category,
            description: String::new(),
            image: String::new(),
            ingredients: String::new(),
            available: true,
        }
    }

    /// Builds a menu item from a catalog record, degrading unparseable
    /// numeric fields to zero. The record's category label decides the
    /// section; records with an unknown label fall into `fallback_category`.
    pub fn from_record(record: &MenuItemRecord, fallback_category: Category) -> MenuItem {
        MenuItem {
            name: record.name.clone(),
            price: parse_price(&record.price),
            size_label: record.size.clone(),
            calories: parse_calories(&record.calories),
            category: Category::from_label(&record.category).unwrap_or(fallback_category),
            description: record.description.clone(),
            image: record.image.clone(),
            ingredients: record.ingredients.clone(),
            available: record.available,
        }
    }

    /// To obtain the name of this item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// To obtain the price of this item
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn size_label(&self) -> &str {
        &self.size_label
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn with_details(mut self, description: &str, image: &str, ingredients: &str) -> MenuItem {
        self.description = description.to_string();
        self.image = image.to_string();
        self.ingredients = ingredients.to_string();
        self
    }

    /// Two items are the same for cart purposes when their names match exactly
    pub fn same_identity(&self, other: &MenuItem) -> bool {
        self.name == other.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, price: &str, calories: &str, category: &str) -> MenuItemRecord {
        MenuItemRecord {
            name: name.to_string(),
            price: price.to_string(),
            size: "Tall".to_string(),
            calories: calories.to_string(),
            category: category.to_string(),
            description: String::new(),
            image: String::new(),
            ingredients: String::new(),
            available: true,
        }
    }

    #[test]
    fn test_parse_well_formed_price() {
        assert_eq!(parse_price("390.00"), 390.0);
        assert_eq!(parse_price(" 450.5 "), 450.5);
    }

    #[test]
    fn test_malformed_price_counts_as_zero() {
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("N/A"), 0.0);
        assert_eq!(parse_price("Rs. 390"), 0.0);
    }

    #[test]
    fn test_malformed_calories_count_as_zero() {
        assert_eq!(parse_calories("180"), 180);
        assert_eq!(parse_calories("unknown"), 0);
        assert_eq!(parse_calories("-5"), 0);
    }

    #[test]
    fn test_from_record_parses_numeric_fields() {
        let item = MenuItem::from_record(
            &record("Cold Brew", "390.00", "120", "cold-coffee"),
            Category::HotCoffee,
        );
        assert_eq!(item.name(), "Cold Brew");
        assert_eq!(item.price(), 390.0);
        assert_eq!(item.calories(), 120);
        assert_eq!(item.category(), Category::ColdCoffee);
        assert!(item.is_available());
    }

    #[test]
    fn test_from_record_degrades_bad_price_to_zero() {
        let item = MenuItem::from_record(
            &record("Mystery Drink", "free!", "oops", "cold-coffee"),
            Category::HotCoffee,
        );
        assert_eq!(item.price(), 0.0);
        assert_eq!(item.calories(), 0);
    }

    #[test]
    fn test_unknown_category_label_falls_back() {
        let item = MenuItem::from_record(
            &record("Latte", "320.00", "150", "no-such-section"),
            Category::HotCoffee,
        );
        assert_eq!(item.category(), Category::HotCoffee);
    }

    #[test]
    fn test_record_survives_the_json_wire_format() {
        let original = record("Cold Brew", "390.00", "5", "cold-coffee");
        let json = serde_json::to_string(&original).unwrap();
        let parsed: MenuItemRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "Cold Brew");
        assert_eq!(parsed.price, "390.00");
        assert_eq!(parsed.category, "cold-coffee");
        assert!(parsed.available);
    }

    #[test]
    fn test_identity_is_name_exact_match() {
        let a = MenuItem::new("Cold Brew", 390.0, "Tall", 120, Category::ColdCoffee);
        let b = MenuItem::new("Cold Brew", 410.0, "Grande", 140, Category::ColdCoffee);
        let c = MenuItem::new("cold brew", 390.0, "Tall", 120, Category::ColdCoffee);
        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&c));
    }
}
