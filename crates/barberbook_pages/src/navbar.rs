// --- File: crates/barberbook_pages/src/navbar.rs ---
use barberbook_common::models::Session;
use barberbook_common::{log_error, SessionService};
use std::sync::Arc;
use tokio::sync::watch;

use crate::context::Navigation;
use crate::messages;
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    Go(Route),
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub action: NavAction,
}

/// The header shown on every page. Follows session changes made anywhere
/// in the process (and, with a watched store, in other processes).
pub struct Navbar {
    session: Arc<dyn SessionService>,
    changes: watch::Receiver<Option<Session>>,
    pub current: Option<Session>,
    /// Set when logging out failed; the session is still stored.
    pub error: Option<String>,
}

impl Navbar {
    pub fn mount(session: Arc<dyn SessionService>) -> Self {
        let changes = session.subscribe();
        let current = session.read();
        Self {
            session,
            changes,
            current,
            error: None,
        }
    }

    /// Applies a pending session change, if any. Returns whether one was
    /// applied.
    pub fn sync(&mut self) -> bool {
        match self.changes.has_changed() {
            Ok(true) => {
                self.current = self.changes.borrow_and_update().clone();
                true
            }
            _ => false,
        }
    }

    /// Waits for the next session change and applies it. Returns `false`
    /// once the session service is gone.
    pub async fn next_change(&mut self) -> bool {
        if self.changes.changed().await.is_err() {
            return false;
        }
        self.current = self.changes.borrow_and_update().clone();
        true
    }

    pub fn is_provider(&self) -> bool {
        self.current.as_ref().is_some_and(Session::is_provider)
    }

    pub fn links(&self) -> Vec<NavLink> {
        let mut links = vec![NavLink {
            label: messages::NAV_BRAND,
            action: NavAction::Go(Route::Home),
        }];
        if self.is_provider() {
            links.push(NavLink {
                label: messages::NAV_PROVIDER_DASHBOARD,
                action: NavAction::Go(Route::ProviderDashboard),
            });
            links.push(NavLink {
                label: messages::NAV_PROVIDER_SETTINGS,
                action: NavAction::Go(Route::ProviderSettings),
            });
        }
        links.push(NavLink {
            label: messages::NAV_MY_APPOINTMENTS,
            action: NavAction::Go(Route::Dashboard),
        });
        links.push(match self.current {
            Some(_) => NavLink {
                label: messages::NAV_LOGOUT,
                action: NavAction::Logout,
            },
            None => NavLink {
                label: messages::NAV_LOGIN,
                action: NavAction::Go(Route::Login),
            },
        });
        links
    }

    /// Clears the session and sends the user to `/login`. If the stored
    /// session cannot be removed the user stays logged in here too.
    pub fn logout(&mut self) -> Navigation {
        if let Err(err) = self.session.clear() {
            log_error(&err, "Could not clear session");
            self.error = Some(messages::LOGOUT_FAILED.to_string());
            return Navigation::Stay;
        }
        self.error = None;
        self.current = None;
        self.changes.mark_unchanged();
        Navigation::redirect(Route::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barberbook_common::models::CurrentUser;
    use barberbook_common::BarberbookError;

    /// A stored session that cannot be removed.
    struct StuckSession {
        tx: watch::Sender<Option<Session>>,
    }

    impl StuckSession {
        fn new() -> Self {
            let user = CurrentUser {
                id: "u1".to_string(),
                name: "Carla".to_string(),
                email: "carla@example.com".to_string(),
                is_provider: false,
            };
            let (tx, _rx) = watch::channel(Some(Session::new("tok", user)));
            Self { tx }
        }
    }

    impl SessionService for StuckSession {
        fn read(&self) -> Option<Session> {
            self.tx.borrow().clone()
        }

        fn save(&self, _token: &str, _user: &CurrentUser) -> Result<(), BarberbookError> {
            Ok(())
        }

        fn clear(&self) -> Result<(), BarberbookError> {
            Err(BarberbookError::StorageError("read-only file system".to_string()))
        }

        fn subscribe(&self) -> watch::Receiver<Option<Session>> {
            self.tx.subscribe()
        }
    }

    #[test]
    fn test_failed_logout_keeps_user_logged_in() {
        let mut navbar = Navbar::mount(Arc::new(StuckSession::new()));
        assert_eq!(navbar.logout(), Navigation::Stay);
        assert!(navbar.current.is_some());
        assert_eq!(navbar.error.as_deref(), Some(messages::LOGOUT_FAILED));
        assert_eq!(navbar.links().last().map(|l| &l.action), Some(&NavAction::Logout));
    }
}
