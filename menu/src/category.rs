//! Menu sections offered by the coffee shop

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    HotCoffee,
    ColdCoffee,
    Tea,
    Snacks,
}

impl Category {
    /// Returns all the possible values of Category
    pub fn values() -> Vec<Category> {
        vec![
            Category::HotCoffee,
            Category::ColdCoffee,
            Category::Tea,
            Category::Snacks,
        ]
    }

    /// The stable label used on the wire and as the fallback table key
    pub fn label(&self) -> &'static str {
        match self {
            Category::HotCoffee => "hot-coffee",
            Category::ColdCoffee => "cold-coffee",
            Category::Tea => "tea",
            Category::Snacks => "snacks",
        }
    }

    /// Parses a wire label back into a Category.
    /// Returns None for labels that don't name a known section.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::values().into_iter().find(|c| c.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_label_round_trips() {
        for category in Category::values() {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert_eq!(Category::from_label("smoothies"), None);
        assert_eq!(Category::from_label(""), None);
    }
}
