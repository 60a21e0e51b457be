//! Static menu lists used when the remote catalog can't be reached.
//! Placeholder product data; the shop never shows an empty menu.

use crate::category::Category;
use crate::menu_item::MenuItem;

/// Returns the hardcoded items for a menu section.
pub fn fallback_items(category: Category) -> Vec<MenuItem> {
    match category {
        Category::HotCoffee => vec![
            MenuItem::new("Latte", 320.0, "Tall", 190, Category::HotCoffee).with_details(
                "Steamed milk over a double espresso shot",
                "",
                "espresso, milk",
            ),
            MenuItem::new("Cappuccino", 340.0, "Tall", 120, Category::HotCoffee).with_details(
                "Espresso with a deep layer of foam",
                "",
                "espresso, milk",
            ),
            MenuItem::new("Americano", 280.0, "Tall", 15, Category::HotCoffee).with_details(
                "Espresso shots topped with hot water",
                "",
                "espresso, water",
            ),
        ],
        Category::ColdCoffee => vec![
            MenuItem::new("Cold Brew", 390.0, "Grande", 5, Category::ColdCoffee).with_details(
                "Slow-steeped, super smooth cold coffee",
                "",
                "coffee, water",
            ),
            MenuItem::new("Iced Mocha", 450.0, "Grande", 350, Category::ColdCoffee).with_details(
                "Espresso, milk and mocha sauce over ice",
                "",
                "espresso, milk, mocha sauce, ice",
            ),
            MenuItem::new("Iced Latte", 360.0, "Grande", 130, Category::ColdCoffee).with_details(
                "Espresso and cold milk over ice",
                "",
                "espresso, milk, ice",
            ),
        ],
        Category::Tea => vec![
            MenuItem::new("Masala Chai", 250.0, "Short", 120, Category::Tea).with_details(
                "Black tea brewed with spices and milk",
                "",
                "black tea, milk, spices",
            ),
            MenuItem::new("Green Tea", 230.0, "Short", 0, Category::Tea).with_details(
                "Single-origin sencha, lightly steeped",
                "",
                "green tea",
            ),
        ],
        Category::Snacks => vec![
            MenuItem::new("Butter Croissant", 210.0, "Piece", 260, Category::Snacks).with_details(
                "Flaky, all-butter croissant",
                "",
                "flour, butter, yeast",
            ),
            MenuItem::new("Chocolate Muffin", 240.0, "Piece", 390, Category::Snacks).with_details(
                "Double chocolate chip muffin",
                "",
                "flour, cocoa, chocolate chips",
            ),
        ],
    }
}
