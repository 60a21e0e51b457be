use menu::category::Category;

use super::menu_request::MenuRequest;

/// Trait representing a request the catalog service can answer.
pub trait Request: Send + Sync {
    /// Returns the menu section the request is about.
    fn category(&self) -> Category;

    /// Returns the request type as a string.
    fn type_to_string(&self) -> String;

    /// Returns a vector of bytes representing the response message.
    /// The format will be:
    /// `{response_type}\n{payload}`
    fn process(&self) -> Vec<u8>;

    /// Generates a log entry for the request and returns it as a string.
    fn log_entry(&self) -> String {
        format!("{} {}\n", self.type_to_string(), self.category().label())
    }
}

/// Converts the message string to its correspondent request type.
/// The string format should be
/// `{message_type}\n{payload}`
/// with payload being the category label.
///
/// # Errors
///
/// Returns an error if the message is incomplete, has an empty payload, or
/// names an unknown request type or category.
pub fn deserialize_message(message: String) -> Result<Box<dyn Request>, String> {
    if message.trim().is_empty() {
        return Err("Incomplete message: missing message type and payload".to_owned());
    }

    let mut parts = message.splitn(2, '\n');
    let message_type = parts
        .next()
        .ok_or_else(|| "Incomplete message: missing type or payload".to_owned())?;
    if message_type.trim().is_empty() {
        return Err("Incomplete message: empty type".to_owned());
    }
    let payload = parts
        .next()
        .ok_or_else(|| "Incomplete message: missing type or payload".to_owned())?;
    if payload.trim().is_empty() {
        return Err("Incomplete message: empty payload".to_owned());
    }

    let request: Box<dyn Request> = match message_type {
        "menu" => {
            let category = Category::from_label(payload.trim())
                .ok_or_else(|| format!("Unknown category '{}'", payload.trim()))?;
            Box::new(MenuRequest::new(category))
        }
        _ => return Err(format!("Unknown message '{}'", message_type)),
    };

    Ok(request)
}
