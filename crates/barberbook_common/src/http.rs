// --- File: crates/barberbook_common/src/http.rs ---
use serde_json::Value;

// Include the client module
pub mod client;

/// Which error-body field wins when both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageOrder {
    /// `error`, then `message`. Used by almost every screen.
    #[default]
    ErrorFirst,
    /// `message`, then `error`. Used by registration.
    MessageFirst,
}

/// Pulls a human-readable message out of an error response body.
///
/// Only non-empty string fields count; anything else reads as "no message"
/// so the caller's fallback is shown instead.
pub fn extract_error_message(body: &Value, order: MessageOrder) -> Option<String> {
    let fields = match order {
        MessageOrder::ErrorFirst => ["error", "message"],
        MessageOrder::MessageFirst => ["message", "error"],
    };
    fields.iter().find_map(|field| {
        body.get(field)
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string)
    })
}

/// Formats the value of an `Authorization` header for a bearer token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
