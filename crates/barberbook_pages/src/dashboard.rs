// --- File: crates/barberbook_pages/src/dashboard.rs ---
use barberbook_common::models::{Appointment, CurrentUser};
use tracing::info;

use crate::booking::{BookingFlow, ProviderSource};
use crate::context::{require_session, Navigation, PageContext};
use crate::messages;
use crate::remote::Remote;

/// `/dashboard`: the customer's appointments plus a booking card for the
/// first listed provider.
pub struct DashboardPage {
    ctx: PageContext,
    pub user: Option<CurrentUser>,
    pub appointments: Remote<Vec<Appointment>>,
    pub booking: Option<BookingFlow>,
}

impl DashboardPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            user: None,
            appointments: Remote::Idle,
            booking: None,
        }
    }

    pub async fn mount(&mut self) -> Navigation {
        let session = match require_session(self.ctx.session.as_ref()) {
            Ok(session) => session,
            Err(route) => return Navigation::redirect(route),
        };
        info!(user = %session.user.id, "Dashboard mounted");

        let api = self.ctx.api.clone();
        self.appointments
            .load(
                api.list_appointments(&session.token),
                messages::LOAD_APPOINTMENTS_FAILED,
            )
            .await;

        let mut flow = BookingFlow::new(
            api,
            ProviderSource::FirstListed,
            session.token.clone(),
            self.ctx.tomorrow(),
        );
        flow.load_provider().await;
        self.booking = Some(flow);
        self.user = Some(session.user);
        Navigation::Stay
    }

    pub async fn load_slots(&mut self) {
        if let Some(flow) = self.booking.as_mut() {
            flow.load_slots().await;
        }
    }

    /// Books a slot; a created appointment goes to the top of the list.
    pub async fn book(&mut self, slot: &str) {
        let Some(flow) = self.booking.as_mut() else {
            return;
        };
        if let Some(appointment) = flow.book(slot).await {
            self.appointments.push_front(appointment);
        }
    }
}
