// --- File: crates/barberbook_pages/src/booking.rs ---

//! The booking flow shared by the customer dashboard and the book page.
//!
//! Load a provider, pick one of its services and a date, list the free
//! slots, book one. A booking the backend rejects as a double booking makes
//! the slot list stale, so it is fetched again once.

use barberbook_common::models::{Appointment, NewAppointment, Provider, Service};
use barberbook_common::BookingApi;
use std::sync::Arc;
use tracing::{info, warn};

use crate::messages;
use crate::remote::{Feedback, Remote};
use crate::slots::SlotPicker;

/// How the flow finds its provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderSource {
    ById(String),
    /// The first provider the backend lists.
    FirstListed,
}

/// True when a server message reports that the slot is already taken.
pub fn is_conflict_message(message: &str) -> bool {
    let lowered = message.to_lowercase();
    messages::CONFLICT_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

pub struct BookingFlow {
    api: Arc<dyn BookingApi>,
    source: ProviderSource,
    token: String,
    pub provider: Remote<Provider>,
    pub picker: SlotPicker,
    pub booking: Option<Feedback>,
    pub booking_in_flight: bool,
}

impl BookingFlow {
    pub fn new(
        api: Arc<dyn BookingApi>,
        source: ProviderSource,
        token: impl Into<String>,
        default_date: impl Into<String>,
    ) -> Self {
        Self {
            api,
            source,
            token: token.into(),
            provider: Remote::Idle,
            picker: SlotPicker::new(default_date),
            booking: None,
            booking_in_flight: false,
        }
    }

    pub fn provider_id(&self) -> Option<&str> {
        self.provider.ready().map(|p| p.id.as_str())
    }

    pub fn services(&self) -> &[Service] {
        self.provider
            .ready()
            .map(|p| p.services.as_slice())
            .unwrap_or(&[])
    }

    pub fn selected_service(&self) -> Option<&Service> {
        let id = self.picker.service_id.as_deref()?;
        self.services().iter().find(|s| s.id == id)
    }

    /// Loads the provider and preselects its first service.
    pub async fn load_provider(&mut self) {
        let api = Arc::clone(&self.api);
        match &self.source {
            ProviderSource::ById(id) => {
                self.provider
                    .load(api.get_provider(id), messages::LOAD_PROVIDER_FAILED)
                    .await;
            }
            ProviderSource::FirstListed => {
                let mut listed = Remote::Idle;
                listed
                    .load(api.list_providers(), messages::LOAD_PROVIDER_FAILED)
                    .await;
                self.provider = match listed {
                    Remote::Ready(providers) => match providers.into_iter().next() {
                        Some(first) => Remote::Ready(first),
                        None => Remote::Failed(messages::NO_PROVIDER.to_string()),
                    },
                    Remote::Failed(message) => Remote::Failed(message),
                    Remote::Idle | Remote::Loading => Remote::Idle,
                };
            }
        }

        let first_service = self.services().first().map(|s| s.id.clone());
        if let Some(provider) = self.provider.ready() {
            info!(provider = %provider.id, services = provider.services.len(), "Provider loaded");
        }
        self.picker.select_service(first_service);
    }

    pub async fn load_slots(&mut self) {
        let provider_id = self.provider_id().map(str::to_string);
        self.picker
            .load(self.api.as_ref(), provider_id.as_deref())
            .await;
    }

    /// Books `slot` (an instant from the slot list).
    ///
    /// Returns the created appointment so the page can show it.
    pub async fn book(&mut self, slot: &str) -> Option<Appointment> {
        if self.booking_in_flight {
            return None;
        }
        let Some(provider_id) = self.provider_id().map(str::to_string) else {
            self.booking = Some(Feedback::Error(messages::PROVIDER_NOT_FOUND.to_string()));
            return None;
        };
        let Some(service_id) = self.picker.service_id.clone() else {
            self.booking = Some(Feedback::Error(
                messages::SELECT_SERVICE_AND_DATE.to_string(),
            ));
            return None;
        };

        self.booking = None;
        self.booking_in_flight = true;
        let request = NewAppointment {
            provider_id,
            service_id,
            date: slot.to_string(),
            notes: String::new(),
        };
        let result = self.api.create_appointment(&self.token, &request).await;
        self.booking_in_flight = false;

        match result {
            Ok(appointment) => {
                info!(appointment = %appointment.id, date = %appointment.date, "Appointment created");
                self.booking = Some(Feedback::success(messages::BOOKING_CREATED));
                Some(appointment)
            }
            Err(err) => {
                let feedback = Feedback::from_error(&err, messages::BOOKING_FAILED);
                let conflict = is_conflict_message(feedback.text());
                self.booking = Some(feedback);
                if conflict {
                    warn!("Slot {} was taken meanwhile; reloading slots", slot);
                    self.load_slots().await;
                }
                None
            }
        }
    }
}
