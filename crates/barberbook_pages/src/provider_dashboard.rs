// --- File: crates/barberbook_pages/src/provider_dashboard.rs ---

//! `/provider/dashboard`: the provider's day agenda, services, weekly
//! availability and time-off blocks.
//!
//! Lists change only after the backend confirms a create or delete.

use barberbook_common::models::{
    Appointment, NewAvailability, NewBlock, ProviderAvailability, ProviderBlock, Service, Session,
};
use tracing::info;

use crate::context::{require_provider, Navigation, PageContext};
use crate::messages;
use crate::remote::{Feedback, Remote};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityForm {
    pub weekday: u8,
    pub start_time: String,
    pub end_time: String,
}

impl Default for AvailabilityForm {
    fn default() -> Self {
        Self {
            weekday: 1,
            start_time: "09:00".to_string(),
            end_time: "18:00".to_string(),
        }
    }
}

/// Time-off form. Bounds are sent as typed; no ordering check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockForm {
    pub start_at: String,
    pub end_at: String,
    pub reason: String,
}

impl BlockForm {
    fn to_request(&self) -> NewBlock {
        let reason = self.reason.trim();
        NewBlock {
            start_at: self.start_at.clone(),
            end_at: self.end_at.clone(),
            reason: (!reason.is_empty()).then(|| reason.to_string()),
        }
    }
}

pub struct ProviderDashboardPage {
    ctx: PageContext,
    pub session: Option<Session>,
    pub selected_date: String,
    pub agenda: Remote<Vec<Appointment>>,
    pub services: Remote<Vec<Service>>,
    pub availabilities: Remote<Vec<ProviderAvailability>>,
    pub availability_form: AvailabilityForm,
    pub availability_feedback: Option<Feedback>,
    pub availability_in_flight: bool,
    pub blocks: Remote<Vec<ProviderBlock>>,
    pub block_form: BlockForm,
    pub block_feedback: Option<Feedback>,
    pub block_in_flight: bool,
}

impl ProviderDashboardPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            session: None,
            selected_date: String::new(),
            agenda: Remote::Idle,
            services: Remote::Idle,
            availabilities: Remote::Idle,
            availability_form: AvailabilityForm::default(),
            availability_feedback: None,
            availability_in_flight: false,
            blocks: Remote::Idle,
            block_form: BlockForm::default(),
            block_feedback: None,
            block_in_flight: false,
        }
    }

    fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }

    pub async fn mount(&mut self) -> Navigation {
        let session = match require_provider(self.ctx.session.as_ref()) {
            Ok(session) => session,
            Err(route) => return Navigation::redirect(route),
        };
        info!(provider = %session.user.id, "Provider dashboard mounted");
        self.selected_date = self.ctx.today();
        self.session = Some(session.clone());

        let api = self.ctx.api.clone();
        self.load_agenda().await;
        self.availabilities
            .load(
                api.list_availabilities(&session.token),
                messages::LOAD_AVAILABILITY_FAILED,
            )
            .await;
        self.services
            .load(
                async {
                    api.get_provider(&session.user.id)
                        .await
                        .map(|provider| provider.services)
                },
                messages::LOAD_SERVICES_FAILED,
            )
            .await;
        self.blocks
            .load(api.list_blocks(&session.token), messages::LOAD_BLOCKS_FAILED)
            .await;
        Navigation::Stay
    }

    async fn load_agenda(&mut self) {
        let Some(token) = self.token() else {
            return;
        };
        let api = self.ctx.api.clone();
        let date = self.selected_date.clone();
        self.agenda
            .load(
                api.provider_appointments(&token, &date),
                messages::LOAD_AGENDA_FAILED,
            )
            .await;
    }

    /// Changes the agenda day and reloads it.
    pub async fn set_date(&mut self, date: impl Into<String>) {
        self.selected_date = date.into();
        self.load_agenda().await;
    }

    pub async fn create_availability(&mut self) {
        let Some(token) = self.token() else {
            return;
        };
        if self.availability_in_flight {
            return;
        }
        self.availability_feedback = None;
        self.availability_in_flight = true;
        let request = NewAvailability {
            weekday: self.availability_form.weekday,
            start_time: self.availability_form.start_time.clone(),
            end_time: self.availability_form.end_time.clone(),
        };
        let result = self.ctx.api.create_availability(&token, &request).await;
        self.availability_in_flight = false;

        self.availability_feedback = Some(match result {
            Ok(created) => {
                info!(availability = %created.id, weekday = created.weekday, "Availability created");
                self.availabilities.push(created);
                Feedback::success(messages::AVAILABILITY_CREATED)
            }
            Err(err) => Feedback::from_error(&err, messages::AVAILABILITY_CREATE_FAILED),
        });
    }

    pub async fn delete_availability(&mut self, availability_id: &str) {
        let Some(token) = self.token() else {
            return;
        };
        if self.availability_in_flight {
            return;
        }
        self.availability_feedback = None;
        self.availability_in_flight = true;
        let result = self
            .ctx
            .api
            .delete_availability(&token, availability_id)
            .await;
        self.availability_in_flight = false;

        self.availability_feedback = Some(match result {
            Ok(()) => {
                info!(availability = availability_id, "Availability removed");
                self.availabilities.retain(|a| a.id != availability_id);
                Feedback::success(messages::AVAILABILITY_REMOVED)
            }
            Err(err) => Feedback::from_error(&err, messages::AVAILABILITY_REMOVE_FAILED),
        });
    }

    /// Submits the block form; on success the form is cleared.
    pub async fn create_block(&mut self) {
        let Some(token) = self.token() else {
            return;
        };
        if self.block_in_flight {
            return;
        }
        self.block_feedback = None;
        self.block_in_flight = true;
        let request = self.block_form.to_request();
        let result = self.ctx.api.create_block(&token, &request).await;
        self.block_in_flight = false;

        self.block_feedback = Some(match result {
            Ok(created) => {
                info!(block = %created.id, "Block created");
                self.blocks.push(created);
                self.block_form = BlockForm::default();
                Feedback::success(messages::BLOCK_CREATED)
            }
            Err(err) => Feedback::from_error(&err, messages::BLOCK_CREATE_FAILED),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reason_becomes_null() {
        let form = BlockForm {
            start_at: "2025-05-06T12:00".to_string(),
            end_at: "2025-05-06T13:00".to_string(),
            reason: "   ".to_string(),
        };
        assert_eq!(form.to_request().reason, None);

        let form = BlockForm {
            reason: "Consulta médica".to_string(),
            ..form
        };
        assert_eq!(form.to_request().reason.as_deref(), Some("Consulta médica"));
    }

    #[test]
    fn test_availability_form_defaults() {
        let form = AvailabilityForm::default();
        assert_eq!(form.weekday, 1);
        assert_eq!(form.start_time, "09:00");
        assert_eq!(form.end_time, "18:00");
    }
}
