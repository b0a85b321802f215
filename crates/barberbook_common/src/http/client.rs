// --- File: crates/barberbook_common/src/http/client.rs ---
use once_cell::sync::OnceCell;
use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The process-wide HTTP client. Created on first use and kept for the
/// lifetime of the process so cookies set by the backend are forwarded on
/// every later call.
static HTTP_CLIENT: OnceCell<Client> = OnceCell::new();

/// Creates a new HTTP client with a cookie store and the given timeout.
///
/// # Arguments
///
/// * `timeout_secs` - The timeout in seconds for the client
///
/// # Returns
///
/// A new reqwest::Client instance with the specified configuration
pub fn create_client(timeout_secs: u64) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .cookie_store(true)
        .build()
}

/// Initialises the shared client with a custom timeout.
///
/// Only the first initialisation takes effect; later calls (and calls after
/// [`http_client`] already created the default client) return the existing
/// instance.
pub fn init_http_client(timeout_secs: u64) -> Result<&'static Client, ReqwestError> {
    if let Some(client) = HTTP_CLIENT.get() {
        return Ok(client);
    }
    let client = create_client(timeout_secs)?;
    Ok(HTTP_CLIENT.get_or_init(|| client))
}

/// Returns the shared client, creating it with defaults if needed.
pub fn http_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        create_client(DEFAULT_TIMEOUT_SECS).expect("Failed to create HTTP client")
    })
}
