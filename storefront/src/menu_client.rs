//! Client side of the remote menu catalog.
//! A kiosk asks the catalog service for the items of one menu section; when
//! the service can't be reached the kiosk serves the static fallback menu
//! instead, so a catalog outage is never fatal for the session.
use std::error::Error;
use std::fmt;
use std::net::UdpSocket;
use std::time::Duration;

use menu::category::Category;
use menu::fallback::fallback_items;
use menu::menu_item::{MenuItem, MenuItemRecord};

#[cfg(test)]
use mockall::automock;

const CATALOG_SERVICE_IP: &str = "127.0.0.1:8085";
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// The catalog could not produce items: network failure, timeout, an
/// `unavailable` reply or an unparseable response. Always recovered by
/// falling back to the static menu.
#[derive(Debug)]
pub struct RemoteUnavailable {
    reason: String,
}

impl RemoteUnavailable {
    pub fn new(reason: &str) -> RemoteUnavailable {
        RemoteUnavailable {
            reason: reason.to_string(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for RemoteUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "menu catalog unavailable: {}", self.reason)
    }
}

impl Error for RemoteUnavailable {}

/// Boundary between the kiosk and the remote catalog. The kiosk never
/// cares where menu items come from, only that it gets a list for the
/// requested section.
#[cfg_attr(test, automock)]
pub trait MenuFetcher {
    fn fetch_items(&self, category: Category) -> Result<Vec<MenuItem>, RemoteUnavailable>;
}

/// Fetches menu sections from the catalog service over UDP.
/// Request format: `menu\n{category label}`.
/// Expected response: `items\n{json array of records}`.
pub struct RemoteMenuClient {
    catalog_addr: String,
}

impl RemoteMenuClient {
    pub fn new() -> RemoteMenuClient {
        RemoteMenuClient {
            catalog_addr: CATALOG_SERVICE_IP.to_string(),
        }
    }

    pub fn with_addr(catalog_addr: &str) -> RemoteMenuClient {
        RemoteMenuClient {
            catalog_addr: catalog_addr.to_string(),
        }
    }

    fn request(&self, category: Category) -> Result<String, RemoteUnavailable> {
        let socket =
            UdpSocket::bind("0.0.0.0:0").map_err(|e| RemoteUnavailable::new(&e.to_string()))?;
        socket
            .set_read_timeout(Some(FETCH_TIMEOUT))
            .map_err(|e| RemoteUnavailable::new(&e.to_string()))?;

        let message = format!("menu\n{}", category.label());
        socket
            .send_to(message.as_bytes(), &self.catalog_addr)
            .map_err(|e| RemoteUnavailable::new(&e.to_string()))?;

        let mut buf = [0; 65536];
        let (size, _) = socket
            .recv_from(&mut buf)
            .map_err(|e| RemoteUnavailable::new(&format!("no response: {}", e)))?;
        Ok(String::from_utf8_lossy(&buf[..size]).to_string())
    }
}

impl Default for RemoteMenuClient {
    fn default() -> Self {
        RemoteMenuClient::new()
    }
}

impl MenuFetcher for RemoteMenuClient {
    fn fetch_items(&self, category: Category) -> Result<Vec<MenuItem>, RemoteUnavailable> {
        let response = self.request(category)?;
        let mut parts = response.splitn(2, '\n');
        let response_type = parts
            .next()
            .ok_or_else(|| RemoteUnavailable::new("empty response"))?;
        match response_type {
            "items" => {
                let payload = parts
                    .next()
                    .ok_or_else(|| RemoteUnavailable::new("items response without payload"))?;
                let records: Vec<MenuItemRecord> = serde_json::from_str(payload)
                    .map_err(|e| RemoteUnavailable::new(&e.to_string()))?;
                Ok(records
                    .iter()
                    .map(|record| MenuItem::from_record(record, category))
                    .collect())
            }
            "unavailable" => Err(RemoteUnavailable::new("catalog reported unavailable")),
            other => Err(RemoteUnavailable::new(&format!(
                "unknown response '{}'",
                other
            ))),
        }
    }
}

/// The fallback branch of the repository boundary: remote items when the
/// catalog answers, the static menu when it doesn't.
pub fn fetch_items_or_fallback(fetcher: &dyn MenuFetcher, category: Category) -> Vec<MenuItem> {
    match fetcher.fetch_items(category) {
        Ok(items) => items,
        Err(e) => {
            println!(
                "[Storefront] {} for '{}', serving fallback menu",
                e,
                category.label()
            );
            fallback_items(category)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_items_are_used_when_the_fetch_succeeds() {
        let mut fetcher = MockMenuFetcher::new();
        fetcher.expect_fetch_items().returning(|category| {
            Ok(vec![MenuItem::new(
                "Flat White",
                330.0,
                "Short",
                170,
                category,
            )])
        });
        let items = fetch_items_or_fallback(&fetcher, Category::HotCoffee);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name(), "Flat White");
    }

    #[test]
    fn test_fallback_menu_is_served_when_the_fetch_fails() {
        let mut fetcher = MockMenuFetcher::new();
        fetcher
            .expect_fetch_items()
            .returning(|_| Err(RemoteUnavailable::new("timed out")));
        let items = fetch_items_or_fallback(&fetcher, Category::ColdCoffee);
        let expected = fallback_items(Category::ColdCoffee);
        assert_eq!(items.len(), expected.len());
        assert!(items.iter().any(|item| item.name() == "Cold Brew"));
    }

    #[test]
    fn test_remote_unavailable_keeps_its_reason() {
        let error = RemoteUnavailable::new("timed out");
        assert_eq!(error.reason(), "timed out");
        assert_eq!(
            error.to_string(),
            "menu catalog unavailable: timed out".to_string()
        );
    }

    #[test]
    fn test_client_errors_when_nothing_listens() {
        // port 9 is the discard service, nothing answers there
        let client = RemoteMenuClient::with_addr("127.0.0.1:9");
        assert!(client.fetch_items(Category::Tea).is_err());
    }
}
