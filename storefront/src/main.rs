use std::process::{exit, Command};

use storefront::generate_sessions;

const NUMBER_KIOSKS: u8 = 3;

fn main() {
    // create files of simulated kiosk sessions
    generate_sessions::generate_sessions(NUMBER_KIOSKS as u32).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        exit(1)
    });

    // create a kiosk process for each session
    let mut children = Vec::new();
    for id in 0..NUMBER_KIOSKS {
        let child = Command::new("cargo")
            .arg("run")
            .arg("--bin")
            .arg("kiosk_process")
            .arg(id.to_string())
            .spawn()
            .unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                exit(1)
            });
        children.push(child);
    }

    for mut child in children {
        if let Err(e) = child.wait() {
            eprintln!("Error waiting for kiosk process: {}", e);
        }
    }
}
