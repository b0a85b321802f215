// --- File: crates/barberbook_pages/src/context.rs ---
use barberbook_common::models::Session;
use barberbook_common::time::{iso_date, today_in, tomorrow_in, DEFAULT_ZONE};
use barberbook_common::{BookingApi, SessionService};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::info;

use crate::routes::Route;

type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// What every page controller is built from.
#[derive(Clone)]
pub struct PageContext {
    pub api: Arc<dyn BookingApi>,
    pub session: Arc<dyn SessionService>,
    pub zone: Tz,
    clock: Clock,
}

impl PageContext {
    pub fn new(api: Arc<dyn BookingApi>, session: Arc<dyn SessionService>) -> Self {
        Self {
            api,
            session,
            zone: DEFAULT_ZONE,
            clock: Arc::new(Utc::now),
        }
    }

    pub fn with_zone(mut self, zone: Tz) -> Self {
        self.zone = zone;
        self
    }

    /// Replaces the wall clock, for deterministic default dates.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Today's date (`YYYY-MM-DD`) in the shop's zone.
    pub fn today(&self) -> String {
        iso_date(today_in(self.zone, self.now()))
    }

    pub fn tomorrow(&self) -> String {
        iso_date(tomorrow_in(self.zone, self.now()))
    }
}

/// Result of mounting a page or running an action on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    Redirect(Route),
}

impl Navigation {
    pub fn redirect(route: Route) -> Self {
        info!(to = %route, "Redirecting");
        Navigation::Redirect(route)
    }

    pub fn target(&self) -> Option<&Route> {
        match self {
            Navigation::Stay => None,
            Navigation::Redirect(route) => Some(route),
        }
    }
}

/// The session, or the page to send an anonymous visitor to.
pub fn require_session(session: &dyn SessionService) -> Result<Session, Route> {
    session.read().ok_or(Route::Login)
}

/// A provider's session. Customers are sent to their own dashboard.
pub fn require_provider(session: &dyn SessionService) -> Result<Session, Route> {
    let current = require_session(session)?;
    if current.is_provider() {
        Ok(current)
    } else {
        Err(Route::Dashboard)
    }
}

/// Where a user lands after login or on `/`.
pub fn landing_route(session: &Session) -> Route {
    if session.is_provider() {
        Route::ProviderDashboard
    } else {
        Route::Dashboard
    }
}
