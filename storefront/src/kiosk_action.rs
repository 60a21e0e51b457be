//! Replayable user actions of a kiosk session.
//! Session scripts are jsonl files with one action per line; the kiosk
//! process replays them against its cart the way taps would.
use serde::{Deserialize, Serialize};

use crate::payment::PaymentMethod;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum KioskAction {
    Add { name: String },
    Remove { name: String },
    Checkout { method: PaymentMethod },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_survive_a_jsonl_round_trip() {
        let actions = vec![
            KioskAction::Add {
                name: "Cold Brew".to_string(),
            },
            KioskAction::Remove {
                name: "Latte".to_string(),
            },
            KioskAction::Checkout {
                method: PaymentMethod::Card,
            },
        ];
        for action in actions {
            let line = serde_json::to_string(&action).unwrap();
            let parsed: KioskAction = serde_json::from_str(&line).unwrap();
            match (action, parsed) {
                (KioskAction::Add { name: a }, KioskAction::Add { name: b }) => assert_eq!(a, b),
                (KioskAction::Remove { name: a }, KioskAction::Remove { name: b }) => {
                    assert_eq!(a, b)
                }
                (KioskAction::Checkout { method: a }, KioskAction::Checkout { method: b }) => {
                    assert_eq!(a, b)
                }
                _ => panic!("action changed variant in serialization"),
            }
        }
    }
}
