//! The document table the service answers from. Numeric fields are kept
//! as text, exactly as the upstream store delivers them; parsing (and the
//! degrade-to-zero handling for bad prices) happens on the client side.
use menu::category::Category;
use menu::menu_item::MenuItemRecord;

fn record(
    name: &str,
    price: &str,
    size: &str,
    calories: &str,
    category: Category,
    description: &str,
    ingredients: &str,
) -> MenuItemRecord {
    MenuItemRecord {
        name: name.to_string(),
        price: price.to_string(),
        size: size.to_string(),
        calories: calories.to_string(),
        category: category.label().to_string(),
        description: description.to_string(),
        image: String::new(),
        ingredients: ingredients.to_string(),
        available: true,
    }
}

/// Returns the stored records for one menu section.
pub fn records_for(category: Category) -> Vec<MenuItemRecord> {
    match category {
        Category::HotCoffee => vec![
            record(
                "Latte",
                "320.00",
                "Tall",
                "190",
                Category::HotCoffee,
                "Steamed milk over a double espresso shot",
                "espresso, milk",
            ),
            record(
                "Cappuccino",
                "340.00",
                "Tall",
                "120",
                Category::HotCoffee,
                "Espresso with a deep layer of foam",
                "espresso, milk",
            ),
            record(
                "Flat White",
                "330.00",
                "Short",
                "170",
                Category::HotCoffee,
                "Ristretto shots with velvety steamed milk",
                "espresso, milk",
            ),
        ],
        Category::ColdCoffee => vec![
            record(
                "Cold Brew",
                "390.00",
                "Grande",
                "5",
                Category::ColdCoffee,
                "Slow-steeped, super smooth cold coffee",
                "coffee, water",
            ),
            record(
                "Iced Mocha",
                "450.00",
                "Grande",
                "350",
                Category::ColdCoffee,
                "Espresso, milk and mocha sauce over ice",
                "espresso, milk, mocha sauce, ice",
            ),
            // price never migrated in the upstream store; clients count it as 0
            record(
                "Frappe of the Week",
                "TBD",
                "Grande",
                "410",
                Category::ColdCoffee,
                "Rotating blended special",
                "ask your barista",
            ),
        ],
        Category::Tea => vec![
            record(
                "Masala Chai",
                "250.00",
                "Short",
                "120",
                Category::Tea,
                "Black tea brewed with spices and milk",
                "black tea, milk, spices",
            ),
            record(
                "Green Tea",
                "230.00",
                "Short",
                "0",
                Category::Tea,
                "Single-origin sencha, lightly steeped",
                "green tea",
            ),
        ],
        Category::Snacks => vec![
            record(
                "Butter Croissant",
                "210.00",
                "Piece",
                "260",
                Category::Snacks,
                "Flaky, all-butter croissant",
                "flour, butter, yeast",
            ),
            record(
                "Chocolate Muffin",
                "240.00",
                "Piece",
                "390",
                Category::Snacks,
                "Double chocolate chip muffin",
                "flour, cocoa, chocolate chips",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu::menu_item::{parse_price, MenuItem};

    #[test]
    fn test_every_category_has_records() {
        for category in Category::values() {
            assert!(!records_for(category).is_empty());
        }
    }

    #[test]
    fn test_records_carry_their_category_label() {
        for category in Category::values() {
            for record in records_for(category) {
                assert_eq!(record.category, category.label());
            }
        }
    }

    #[test]
    fn test_unmigrated_price_degrades_to_zero_client_side() {
        let records = records_for(Category::ColdCoffee);
        let frappe = records
            .iter()
            .find(|r| r.name == "Frappe of the Week")
            .expect("seeded record missing");
        assert_eq!(parse_price(&frappe.price), 0.0);
        let item = MenuItem::from_record(frappe, Category::ColdCoffee);
        assert_eq!(item.price(), 0.0);
        assert_eq!(item.calories(), 410);
    }
}
