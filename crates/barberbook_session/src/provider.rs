// --- File: crates/barberbook_session/src/provider.rs ---
use barberbook_common::models::{CurrentUser, Session};
use barberbook_common::{BarberbookError, SessionService};
use tokio::sync::watch;
use tracing::info;

use crate::store::SessionStore;

/// The injectable session service.
///
/// Wraps a [`SessionStore`] and publishes the session on a watch channel
/// after every write. Controllers hold it as `Arc<dyn SessionService>`.
pub struct SessionProvider {
    store: SessionStore,
    tx: watch::Sender<Option<Session>>,
}

impl SessionProvider {
    pub fn new(store: SessionStore) -> Self {
        let (tx, _rx) = watch::channel(store.read());
        Self { store, tx }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Re-reads storage and publishes the result if it differs from the
    /// last published value. Returns whether subscribers were notified.
    pub fn refresh(&self) -> bool {
        let current = self.store.read();
        self.tx.send_if_modified(|published| {
            if *published == current {
                false
            } else {
                *published = current;
                true
            }
        })
    }
}

impl SessionService for SessionProvider {
    fn read(&self) -> Option<Session> {
        self.store.read()
    }

    fn save(&self, token: &str, user: &CurrentUser) -> Result<(), BarberbookError> {
        self.store.save(token, user)?;
        info!(user_id = %user.id, provider = user.is_provider, "Session saved");
        self.tx
            .send_replace(Some(Session::new(token, user.clone())));
        Ok(())
    }

    fn clear(&self) -> Result<(), BarberbookError> {
        self.store.clear()?;
        info!("Session cleared");
        self.tx.send_replace(None);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStorage, MemoryStorage};
    use crate::store::{ACCESS_TOKEN_KEY, CURRENT_USER_KEY};
    use std::sync::Arc;

    fn provider_user() -> CurrentUser {
        CurrentUser {
            id: "p1".to_string(),
            name: "Bruno".to_string(),
            email: "bruno@example.com".to_string(),
            is_provider: true,
        }
    }

    #[tokio::test]
    async fn test_writes_are_published() {
        let provider = SessionProvider::new(SessionStore::new(Arc::new(MemoryStorage::new())));
        let mut rx = provider.subscribe();
        assert!(rx.borrow().is_none());

        provider.save("tok", &provider_user()).unwrap();
        rx.changed().await.unwrap();
        assert_eq!(
            rx.borrow_and_update().as_ref().map(|s| s.token.clone()),
            Some("tok".to_string())
        );

        provider.clear().unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
    }

    #[test]
    fn test_refresh_only_notifies_on_change() {
        let storage = Arc::new(MemoryStorage::new());
        let provider = SessionProvider::new(SessionStore::new(storage.clone()));
        assert!(!provider.refresh());

        // Simulates another process writing the same storage
        storage.set(ACCESS_TOKEN_KEY, "external").unwrap();
        storage
            .set(
                CURRENT_USER_KEY,
                &serde_json::to_string(&provider_user()).unwrap(),
            )
            .unwrap();
        assert!(provider.refresh());
        assert!(!provider.refresh());
        assert_eq!(
            provider.subscribe().borrow().as_ref().map(|s| s.is_provider()),
            Some(true)
        );
    }
}
