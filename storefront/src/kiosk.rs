//! Represents one self-order kiosk of the coffee shop.
//!
//! A kiosk owns exactly one session cart. It resolves its menu once at
//! startup (remote catalog, or the static fallback when the catalog is
//! down) and then mutates the cart only from inside its own message
//! handlers, so no two cart operations ever interleave.

use std::collections::HashMap;

use actix::{Actor, Context, Handler, MessageResult};
use menu::category::Category;
use menu::menu_item::MenuItem;

use crate::cart_store::CartStore;
use crate::checkout_state::CheckoutState;
use crate::kiosk_command::{CheckoutCommand, KioskCommand, ShowCart};
use crate::menu_client::{fetch_items_or_fallback, MenuFetcher};
use crate::payment::{checkout, Receipt};

pub struct Kiosk {
    id: usize,
    cart: CartStore,
    menu: HashMap<String, MenuItem>,
    state: CheckoutState,
}

impl Kiosk {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Creates a kiosk with the given id, resolving every menu section up
    /// front. Items flagged unavailable never enter the lookup, so they
    /// can't be added to a cart.
    pub fn new(id: usize, fetcher: &dyn MenuFetcher) -> Kiosk {
        let mut lookup = HashMap::new();
        for category in Category::values() {
            for item in fetch_items_or_fallback(fetcher, category) {
                if item.is_available() {
                    lookup.insert(item.name().to_string(), item);
                }
            }
        }
        println!("[KIOSK {}] menu resolved, {} items on offer", id, lookup.len());
        Kiosk {
            id,
            cart: CartStore::new(),
            menu: lookup,
            state: CheckoutState::Browsing,
        }
    }

    fn add_by_name(&mut self, name: &str) {
        match self.menu.get(name).cloned() {
            Some(item) => {
                self.cart.add_item(&item);
                self.state = CheckoutState::Browsing;
                println!(
                    "[KIOSK {}] added '{}' x{} (cart: {} items, {:.2})",
                    self.id,
                    name,
                    self.cart.quantity_of(&item),
                    self.cart.total_count(),
                    self.cart.total_amount()
                );
            }
            None => println!("[KIOSK {}] '{}' is not on the menu, ignoring", self.id, name),
        }
    }

    fn remove_by_name(&mut self, name: &str) {
        match self.menu.get(name).cloned() {
            Some(item) => {
                self.cart.remove_item(&item);
                println!(
                    "[KIOSK {}] removed one '{}' (cart: {} items, {:.2})",
                    self.id,
                    name,
                    self.cart.total_count(),
                    self.cart.total_amount()
                );
            }
            None => println!("[KIOSK {}] '{}' is not on the menu, ignoring", self.id, name),
        }
    }

    fn run_checkout(&mut self, command: CheckoutCommand) -> Option<Receipt> {
        if self.cart.is_empty() {
            println!("[KIOSK {}] nothing to check out", self.id);
            return None;
        }
        self.state = CheckoutState::AwaitingConfirmation;
        println!(
            "[KIOSK {}] paying {:.2} with {}",
            self.id,
            self.cart.total_amount(),
            command.method.label()
        );
        let receipt = checkout(&mut self.cart, command.method);
        if receipt.is_some() {
            self.state = CheckoutState::Confirmed;
            println!("[KIOSK {}] payment confirmed, cart cleared", self.id);
        }
        receipt
    }
}

impl Actor for Kiosk {
    type Context = Context<Self>;
}

impl Handler<KioskCommand> for Kiosk {
    type Result = ();

    fn handle(&mut self, msg: KioskCommand, _ctx: &mut Context<Self>) {
        match msg {
            KioskCommand::AddByName { name } => self.add_by_name(&name),
            KioskCommand::RemoveByName { name } => self.remove_by_name(&name),
        }
    }
}

impl Handler<ShowCart> for Kiosk {
    type Result = MessageResult<ShowCart>;

    fn handle(&mut self, _msg: ShowCart, _ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.cart.snapshot())
    }
}

impl Handler<CheckoutCommand> for Kiosk {
    type Result = MessageResult<CheckoutCommand>;

    fn handle(&mut self, msg: CheckoutCommand, _ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.run_checkout(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu_client::{MockMenuFetcher, RemoteUnavailable};

    fn offline_kiosk() -> Kiosk {
        let mut fetcher = MockMenuFetcher::new();
        fetcher
            .expect_fetch_items()
            .returning(|_| Err(RemoteUnavailable::new("offline")));
        Kiosk::new(7, &fetcher)
    }

    #[test]
    fn test_kiosk_serves_the_fallback_menu_when_offline() {
        let kiosk = offline_kiosk();
        assert!(kiosk.menu.contains_key("Cold Brew"));
        assert!(kiosk.menu.contains_key("Masala Chai"));
        assert_eq!(kiosk.state(), CheckoutState::Browsing);
    }

    #[test]
    fn test_adding_by_name_goes_through_the_cart() {
        let mut kiosk = offline_kiosk();
        kiosk.add_by_name("Cold Brew");
        kiosk.add_by_name("Cold Brew");
        kiosk.add_by_name("Iced Mocha");
        let snapshot = kiosk.cart.snapshot();
        assert_eq!(snapshot.total_count(), 3);
        assert_eq!(snapshot.total_amount(), 1230.0);
        assert_eq!(snapshot.lines().len(), 2);
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let mut kiosk = offline_kiosk();
        kiosk.add_by_name("Pumpkin Spice Latte");
        kiosk.remove_by_name("Pumpkin Spice Latte");
        assert!(kiosk.cart.is_empty());
    }

    #[test]
    fn test_unavailable_items_never_reach_the_menu() {
        let mut fetcher = MockMenuFetcher::new();
        fetcher.expect_fetch_items().returning(|category| {
            let sold_out = MenuItem::from_record(
                &menu::menu_item::MenuItemRecord {
                    name: "Seasonal Special".to_string(),
                    price: "500.00".to_string(),
                    size: "Tall".to_string(),
                    calories: "200".to_string(),
                    category: category.label().to_string(),
                    description: String::new(),
                    image: String::new(),
                    ingredients: String::new(),
                    available: false,
                },
                category,
            );
            Ok(vec![sold_out])
        });
        let kiosk = Kiosk::new(1, &fetcher);
        assert!(kiosk.menu.is_empty());
    }
}
