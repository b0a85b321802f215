// --- File: crates/barberbook_session/src/lib.rs ---

//! Session persistence for the BarberBook client.
//!
//! The session is the access token plus the logged-in user, stored under
//! the keys `accessToken` and `currentUser` of a key/value storage. Page
//! controllers never touch the storage directly; they go through the
//! [`SessionProvider`], which also notifies subscribers of every change.

pub mod error;
pub mod provider;
pub mod storage;
pub mod store;
pub mod watcher;

use barberbook_config::SessionConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

pub use error::SessionError;
pub use provider::SessionProvider;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{SessionStore, ACCESS_TOKEN_KEY, CURRENT_USER_KEY};
pub use watcher::{watch_storage_file, SessionWatch, DEFAULT_DEBOUNCE};

/// Where the storage file lives: the configured path, else
/// `<data dir>/barberbook/storage.json`. `None` when neither is available.
pub fn storage_path(config: &SessionConfig) -> Option<PathBuf> {
    if let Some(path) = config.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::data_local_dir().map(|dir| dir.join("barberbook").join("storage.json"))
}

/// Builds the session provider for the given configuration.
///
/// Without a storage location the provider runs detached and every session
/// operation is a no-op. When `watch` is set, the returned [`SessionWatch`]
/// must be kept alive for as long as changes should be followed.
pub fn open_session(config: &SessionConfig) -> (Arc<SessionProvider>, Option<SessionWatch>) {
    let Some(path) = storage_path(config) else {
        warn!("No storage location available; session will not persist");
        return (Arc::new(SessionProvider::new(SessionStore::detached())), None);
    };
    debug!("Session storage at {}", path.display());

    let storage = Arc::new(FileStorage::new(path.clone()));
    let provider = Arc::new(SessionProvider::new(SessionStore::new(storage)));

    let watch = if config.watch {
        match watch_storage_file(provider.clone(), &path, DEFAULT_DEBOUNCE) {
            Ok(watch) => Some(watch),
            Err(err) => {
                warn!("Session changes from other processes will not be followed: {}", err);
                None
            }
        }
    } else {
        None
    };

    (provider, watch)
}
