// --- File: crates/barberbook_pages/src/book.rs ---
use barberbook_common::models::Appointment;
use tracing::info;

use crate::booking::{BookingFlow, ProviderSource};
use crate::context::{require_session, Navigation, PageContext};

/// `/book/{providerId}`.
pub struct BookPage {
    ctx: PageContext,
    provider_id: String,
    pub flow: Option<BookingFlow>,
    /// Appointments booked during this visit, newest first.
    pub booked: Vec<Appointment>,
}

impl BookPage {
    pub fn new(ctx: PageContext, provider_id: impl Into<String>) -> Self {
        Self {
            ctx,
            provider_id: provider_id.into(),
            flow: None,
            booked: Vec::new(),
        }
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub async fn mount(&mut self) -> Navigation {
        let session = match require_session(self.ctx.session.as_ref()) {
            Ok(session) => session,
            Err(route) => return Navigation::redirect(route),
        };
        info!(provider = %self.provider_id, "Book page mounted");

        let mut flow = BookingFlow::new(
            self.ctx.api.clone(),
            ProviderSource::ById(self.provider_id.clone()),
            session.token,
            self.ctx.tomorrow(),
        );
        flow.load_provider().await;
        self.flow = Some(flow);
        Navigation::Stay
    }

    pub async fn load_slots(&mut self) {
        if let Some(flow) = self.flow.as_mut() {
            flow.load_slots().await;
        }
    }

    pub async fn book(&mut self, slot: &str) {
        let Some(flow) = self.flow.as_mut() else {
            return;
        };
        if let Some(appointment) = flow.book(slot).await {
            self.booked.insert(0, appointment);
        }
    }
}
