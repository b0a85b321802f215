// --- File: crates/barberbook_common/src/error.rs ---
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::http::{extract_error_message, MessageOrder};

/// The base error type for the BarberBook client.
///
/// Each crate can extend this by implementing From<SpecificError> for BarberbookError.
#[derive(Error, Debug)]
pub enum BarberbookError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error reading or writing the session storage
    #[error("Storage error: {0}")]
    StorageError(String),

    /// The backend rejected a request
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
}

/// Failure of a single backend call.
///
/// This is the error type of the [`crate::services::BookingApi`] seam. Page
/// controllers never show it directly; they turn it into text with
/// [`ApiError::user_message`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (connection, timeout, TLS).
    #[error("Request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Server responded with status {status}")]
    Status { status: u16, body: Option<Value> },

    /// The response body did not have the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds a status error from a JSON body.
    pub fn status(status: u16, body: Value) -> Self {
        ApiError::Status {
            status,
            body: Some(body),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable text supplied by the server, if any.
    pub fn server_message(&self, order: MessageOrder) -> Option<String> {
        match self {
            ApiError::Status {
                body: Some(body), ..
            } => extract_error_message(body, order),
            _ => None,
        }
    }

    /// Server text (`error` first, then `message`) or the given fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.user_message_with(MessageOrder::ErrorFirst, fallback)
    }

    pub fn user_message_with(&self, order: MessageOrder, fallback: &str) -> String {
        self.server_message(order)
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

// Common error conversions
impl From<ApiError> for BarberbookError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(msg) => BarberbookError::HttpError(msg),
            ApiError::Decode(msg) => BarberbookError::ParseError(msg),
            ApiError::Status { status, ref body } => {
                let message = body
                    .as_ref()
                    .and_then(|b| extract_error_message(b, MessageOrder::ErrorFirst))
                    .unwrap_or_else(|| format!("status {}", status));
                BarberbookError::ApiError { status, message }
            }
        }
    }
}

impl From<reqwest::Error> for BarberbookError {
    fn from(err: reqwest::Error) -> Self {
        BarberbookError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for BarberbookError {
    fn from(err: serde_json::Error) -> Self {
        BarberbookError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for BarberbookError {
    fn from(err: std::io::Error) -> Self {
        BarberbookError::StorageError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> BarberbookError {
    BarberbookError::ConfigError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::status(409, json!({"error": "Já existe um agendamento neste horário"}));
        assert_eq!(
            err.user_message("Erro ao criar agendamento"),
            "Já existe um agendamento neste horário"
        );
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message("Falha ao entrar"), "Falha ao entrar");

        let err = ApiError::Status {
            status: 500,
            body: None,
        };
        assert_eq!(err.user_message("Falha ao entrar"), "Falha ao entrar");
    }

    #[test]
    fn test_setup_errors_keep_their_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        assert!(matches!(
            BarberbookError::from(io),
            BarberbookError::StorageError(_)
        ));
        assert_eq!(
            config_error("BACKEND_URL is required").to_string(),
            "Configuration error: BACKEND_URL is required"
        );
    }

    #[test]
    fn test_into_barberbook_error() {
        let err: BarberbookError = ApiError::status(401, json!({"message": "Token inválido"})).into();
        match err {
            BarberbookError::ApiError { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Token inválido");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
