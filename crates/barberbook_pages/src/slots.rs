// --- File: crates/barberbook_pages/src/slots.rs ---
use barberbook_common::models::SlotQuery;
use barberbook_common::BookingApi;
use tracing::debug;

use crate::messages;
use crate::remote::Remote;

/// Service + date selection and the free slots for it.
///
/// Shared by both booking screens and the provider's slot preview.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotPicker {
    pub service_id: Option<String>,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub slots: Remote<Vec<String>>,
}

impl SlotPicker {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            service_id: None,
            date: date.into(),
            slots: Remote::Idle,
        }
    }

    pub fn select_service(&mut self, service_id: Option<String>) {
        self.service_id = service_id.filter(|id| !id.is_empty());
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    pub fn is_loading(&self) -> bool {
        self.slots.is_loading()
    }

    /// Fetches the free slots of `provider_id` for the current selection.
    ///
    /// An incomplete selection fails without a request. The previous list is
    /// discarded before the request goes out.
    pub async fn load(&mut self, api: &dyn BookingApi, provider_id: Option<&str>) {
        let Some(provider_id) = provider_id.filter(|id| !id.is_empty()) else {
            self.slots = Remote::Failed(messages::PROVIDER_NOT_FOUND.to_string());
            return;
        };
        let service_id = match self.service_id.as_deref() {
            Some(id) if !self.date.trim().is_empty() => id,
            _ => {
                self.slots = Remote::Failed(messages::SELECT_SERVICE_AND_DATE.to_string());
                return;
            }
        };

        let query = SlotQuery {
            provider_id: provider_id.to_string(),
            date: self.date.trim().to_string(),
            service_id: service_id.to_string(),
        };
        debug!(provider = %query.provider_id, date = %query.date, service = %query.service_id, "Loading slots");
        self.slots
            .load(api.available_slots(&query), messages::LOAD_SLOTS_FAILED)
            .await;
    }
}
