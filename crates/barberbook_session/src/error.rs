// --- File: crates/barberbook_session/src/error.rs ---
use barberbook_common::BarberbookError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session storage is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Session storage lock poisoned")]
    Poisoned,

    #[error("Failed to watch session storage: {0}")]
    Watch(String),
}

impl From<notify::Error> for SessionError {
    fn from(err: notify::Error) -> Self {
        SessionError::Watch(err.to_string())
    }
}

impl From<SessionError> for BarberbookError {
    fn from(err: SessionError) -> Self {
        BarberbookError::StorageError(err.to_string())
    }
}
