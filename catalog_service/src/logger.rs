use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::messages::message::Request;

const LOG_FILE_PATH: &str = "catalog_requests.log";

/// Append-only log of every well-formed request the service answered.
pub struct Logger {
    file: File,
}

impl Logger {
    pub async fn new() -> Result<Self, String> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE_PATH)
            .await
            .map_err(|e| format!("Error opening log file: {}", e))?;
        Ok(Logger { file })
    }

    pub async fn log(&mut self, request: &dyn Request) -> Result<(), String> {
        self.file
            .write_all(request.log_entry().as_bytes())
            .await
            .map_err(|e| format!("Error writing log entry: {}", e))
    }
}
