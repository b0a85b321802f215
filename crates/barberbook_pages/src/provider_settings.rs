// --- File: crates/barberbook_pages/src/provider_settings.rs ---
use barberbook_common::models::{NewService, ProviderConfig, Service, Session};
use tracing::info;

use crate::context::{require_provider, Navigation, PageContext};
use crate::messages;
use crate::remote::{Feedback, Remote};
use crate::slots::SlotPicker;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceForm {
    pub name: String,
    pub duration: u32,
    pub price: f64,
}

impl Default for ServiceForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            duration: 30,
            price: 50.0,
        }
    }
}

/// `/provider/settings`: booking policy, the service catalogue and a preview
/// of the slots customers will see.
pub struct ProviderSettingsPage {
    ctx: PageContext,
    pub session: Option<Session>,
    /// Last state of the config request. The editable values live in
    /// `config_form`, which starts at the defaults.
    pub config: Remote<ProviderConfig>,
    pub config_form: ProviderConfig,
    pub config_feedback: Option<Feedback>,
    pub config_in_flight: bool,
    pub services: Remote<Vec<Service>>,
    pub service_form: ServiceForm,
    pub services_feedback: Option<Feedback>,
    pub services_in_flight: bool,
    pub preview: SlotPicker,
}

impl ProviderSettingsPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            session: None,
            config: Remote::Idle,
            config_form: ProviderConfig::default(),
            config_feedback: None,
            config_in_flight: false,
            services: Remote::Idle,
            service_form: ServiceForm::default(),
            services_feedback: None,
            services_in_flight: false,
            preview: SlotPicker::new(""),
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
        info!(provider = %session.user.id, "Provider settings mounted");
        self.preview.set_date(self.ctx.tomorrow());
        self.session = Some(session.clone());

        let api = self.ctx.api.clone();
        self.config
            .load(
                api.get_provider_config(&session.token),
                messages::LOAD_CONFIG_FAILED,
            )
            .await;
        if let Some(config) = self.config.ready() {
            self.config_form = *config;
        }

        self.services
            .load(
                api.list_provider_services(&session.token),
                messages::LOAD_SERVICES_FAILED,
            )
            .await;
        if self.preview.service_id.is_none() {
            let first = self.services.items().first().map(|s| s.id.clone());
            self.preview.select_service(first);
        }
        Navigation::Stay
    }

    pub async fn save_config(&mut self) {
        let Some(token) = self.token() else {
            return;
        };
        if self.config_in_flight {
            return;
        }
        self.config_feedback = None;
        self.config_in_flight = true;
        let wanted = self.config_form;
        let result = self.ctx.api.save_provider_config(&token, &wanted).await;
        self.config_in_flight = false;

        self.config_feedback = Some(match result {
            Ok(saved) => {
                info!(
                    max_booking_days = saved.max_booking_days,
                    cancel_booking_hours = saved.cancel_booking_hours,
                    "Provider config saved"
                );
                self.config = Remote::Ready(saved);
                self.config_form = saved;
                Feedback::success(messages::CONFIG_SAVED)
            }
            Err(err) => Feedback::from_error(&err, messages::CONFIG_SAVE_FAILED),
        });
    }

    /// Creates a service from the form; the name is cleared on success.
    pub async fn create_service(&mut self) {
        let Some(token) = self.token() else {
            return;
        };
        if self.services_in_flight {
            return;
        }
        self.services_feedback = None;
        self.services_in_flight = true;
        let request = NewService {
            name: self.service_form.name.clone(),
            duration: self.service_form.duration,
            price: self.service_form.price,
        };
        let result = self.ctx.api.create_provider_service(&token, &request).await;
        self.services_in_flight = false;

        self.services_feedback = Some(match result {
            Ok(created) => {
                info!(service = %created.id, "Service created");
                self.services.push(created);
                self.service_form.name.clear();
                Feedback::success(messages::SERVICE_CREATED)
            }
            Err(err) => Feedback::from_error(&err, messages::SERVICE_CREATE_FAILED),
        });
    }

    /// Deletes a service. If it was selected in the preview, the selection
    /// is cleared.
    pub async fn delete_service(&mut self, service_id: &str) {
        let Some(token) = self.token() else {
            return;
        };
        if self.services_in_flight {
            return;
        }
        self.services_feedback = None;
        self.services_in_flight = true;
        let result = self
            .ctx
            .api
            .delete_provider_service(&token, service_id)
            .await;
        self.services_in_flight = false;

        self.services_feedback = Some(match result {
            Ok(()) => {
                info!(service = service_id, "Service removed");
                self.services.retain(|s| s.id != service_id);
                if self.preview.service_id.as_deref() == Some(service_id) {
                    self.preview.select_service(None);
                }
                Feedback::success(messages::SERVICE_REMOVED)
            }
            Err(err) => Feedback::from_error(&err, messages::SERVICE_REMOVE_FAILED),
        });
    }

    /// Slots of the provider's own calendar for the preview selection.
    pub async fn load_preview(&mut self) {
        let provider_id = self.session.as_ref().map(|s| s.user.id.clone());
        let api = self.ctx.api.clone();
        self.preview
            .load(api.as_ref(), provider_id.as_deref())
            .await;
    }
}
