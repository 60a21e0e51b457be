use tokio::io;
use tokio::net::UdpSocket;

use crate::logger::Logger;
use crate::messages::message;

const CATALOG_SERVICE_IP: &str = "127.0.0.1:8085";

async fn handle_messages(mut logger: Logger) -> io::Result<()> {
    let socket = UdpSocket::bind(CATALOG_SERVICE_IP).await?;
    println!("[Catalog Service] Listening on: {}", socket.local_addr()?);

    loop {
        let mut buf = [0; 1024];
        let (len, addr) = socket.recv_from(&mut buf).await?;
        let str_read = String::from_utf8_lossy(&buf[..len]).to_string();

        match message::deserialize_message(str_read) {
            Ok(request) => {
                println!(
                    "[Catalog Service] Received {} request for '{}' from {}",
                    request.type_to_string(),
                    request.category().label(),
                    addr
                );

                let response = request.process();
                socket.send_to(&response, addr).await?;

                if let Err(e) = logger.log(&*request).await {
                    eprintln!("[Catalog Service] Error logging request: {}", e);
                }
            }
            Err(e) => {
                eprintln!("[Catalog Service] Error deserializing request: {}", e);
            }
        }
    }
}

pub fn run() -> Result<(), String> {
    let runtime = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;

    runtime.block_on(async {
        match Logger::new().await {
            Ok(logger) => {
                if let Err(err) = handle_messages(logger).await {
                    eprintln!("Error handling requests: {}", err);
                }
            }
            Err(e) => {
                eprintln!("Failed to initialize logger: {}", e);
                return Err(e);
            }
        }
        Ok(())
    })
}
