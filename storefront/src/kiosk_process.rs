//! Replays one session script against a kiosk actor.
//! Expected jsonl line format: one serialized KioskAction per line.
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};

use actix::Actor;
use storefront::kiosk::Kiosk;
use storefront::kiosk_action::KioskAction;
use storefront::kiosk_command::{CheckoutCommand, KioskCommand, ShowCart};
use storefront::menu_client::RemoteMenuClient;

#[actix_rt::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let id: usize = args[1].parse()?;

    let client = RemoteMenuClient::new();
    let kiosk = Kiosk::new(id, &client).start();

    let file_path = format!("session_kiosk_{}.jsonl", id);
    let file = File::open(file_path)?;
    let reader = BufReader::new(file);
    for line in reader.lines() {
        let action: KioskAction = serde_json::from_str(&line?)?;
        match action {
            KioskAction::Add { name } => {
                kiosk.send(KioskCommand::AddByName { name }).await?;
            }
            KioskAction::Remove { name } => {
                kiosk.send(KioskCommand::RemoveByName { name }).await?;
            }
            KioskAction::Checkout { method } => {
                match kiosk.send(CheckoutCommand { method }).await? {
                    Some(receipt) => {
                        println!(
                            "[KIOSK {}] receipt: {} items, {:.2} paid with {}",
                            id,
                            receipt.order().total_count(),
                            receipt.order().total_amount(),
                            receipt.method().label()
                        );
                    }
                    None => println!("[KIOSK {}] checkout skipped, cart was empty", id),
                }
            }
        }
    }

    let snapshot = kiosk.send(ShowCart).await?;
    println!(
        "[KIOSK {}] session over, cart holds {} items ({:.2})",
        id,
        snapshot.total_count(),
        snapshot.total_amount()
    );
    Ok(())
}
