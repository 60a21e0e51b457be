use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::Write;

use menu::category::Category;
use menu::fallback::fallback_items;

use crate::kiosk_action::KioskAction;
use crate::payment::PaymentMethod;

/// Writes one simulated session script per kiosk as
/// `session_kiosk_{id}.jsonl`. Actions are drawn from the fallback menu's
/// item names, with the occasional remove of an item the session never
/// added (which the cart must treat as a no-op), and end with a checkout.
pub fn generate_sessions(kiosk_number: u32) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::thread_rng();

    let names: Vec<String> = Category::values()
        .into_iter()
        .flat_map(fallback_items)
        .map(|item| item.name().to_string())
        .collect();

    for i in 0..kiosk_number {
        let mut file = File::create(format!("session_kiosk_{}.jsonl", i))?;
        let mut actions = Vec::new();
        for _ in 0..rng.gen_range(3..12) {
            let name = names
                .choose(&mut rng)
                .ok_or_else(|| String::from("Error choosing an item name"))?
                .clone();
            if rng.gen_bool(0.75) {
                actions.push(KioskAction::Add { name });
            } else {
                actions.push(KioskAction::Remove { name });
            }
        }
        let method = *PaymentMethod::values()
            .choose(&mut rng)
            .ok_or_else(|| String::from("Error choosing a payment method"))?;
        actions.push(KioskAction::Checkout { method });

        for action in actions {
            file.write_all(serde_json::to_string(&action)?.as_bytes())?;
            file.write_all(b"\n")?;
        }
    }
    Ok(())
}
