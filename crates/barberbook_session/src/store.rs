// --- File: crates/barberbook_session/src/store.rs ---
use barberbook_common::models::{CurrentUser, Session};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::SessionError;
use crate::storage::KeyValueStorage;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Reads and writes the session pair in a key/value storage.
///
/// A store without storage (no data directory on this machine) accepts every
/// call and remembers nothing.
#[derive(Clone)]
pub struct SessionStore {
    storage: Option<Arc<dyn KeyValueStorage>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    pub fn detached() -> Self {
        Self { storage: None }
    }

    pub fn has_storage(&self) -> bool {
        self.storage.is_some()
    }

    /// The stored session, if both parts are present and the user parses.
    pub fn read(&self) -> Option<Session> {
        let storage = self.storage.as_ref()?;

        let token = match storage.get(ACCESS_TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => return None,
            Err(err) => {
                warn!("Session storage unreadable: {}", err);
                return None;
            }
        };
        let raw_user = match storage.get(CURRENT_USER_KEY) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return None,
            Err(err) => {
                warn!("Session storage unreadable: {}", err);
                return None;
            }
        };

        match serde_json::from_str::<CurrentUser>(&raw_user) {
            Ok(user) => Some(Session::new(token, user)),
            Err(err) => {
                debug!("Stored user is not valid, treating as logged out: {}", err);
                None
            }
        }
    }

    pub fn save(&self, token: &str, user: &CurrentUser) -> Result<(), SessionError> {
        let Some(storage) = self.storage.as_ref() else {
            return Ok(());
        };
        let user_json = serde_json::to_string(user)?;
        storage.set(ACCESS_TOKEN_KEY, token)?;
        storage.set(CURRENT_USER_KEY, &user_json)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        let Some(storage) = self.storage.as_ref() else {
            return Ok(());
        };
        storage.remove(ACCESS_TOKEN_KEY)?;
        storage.remove(CURRENT_USER_KEY)?;
        Ok(())
    }
}
