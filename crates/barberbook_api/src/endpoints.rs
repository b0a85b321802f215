// --- File: crates/barberbook_api/src/endpoints.rs ---
use barberbook_common::models::{
    Appointment, LoginRequest, LoginResponse, NewAppointment, NewAvailability, NewBlock,
    NewService, Provider, ProviderAvailability, ProviderBlock, ProviderConfig, RegisterRequest,
    Service, SlotQuery,
};
use barberbook_common::{ApiError, BookingApi, BoxFuture};

use crate::client::ApiClient;
use crate::envelopes::{
    AppointmentEnvelope, AppointmentsEnvelope, AvailabilitiesEnvelope, AvailabilityEnvelope,
    BlockEnvelope, BlocksEnvelope, ConfigBody, ProviderEnvelope, ProvidersEnvelope,
    ServiceEnvelope, ServicesEnvelope, SlotsEnvelope,
};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const PROVIDERS_PATH: &str = "/api/providers";
pub const APPOINTMENTS_PATH: &str = "/api/appointments";
pub const SLOTS_PATH: &str = "/api/appointments/slots";
pub const PROVIDER_CONFIG_PATH: &str = "/api/provider/config";
pub const PROVIDER_SERVICES_PATH: &str = "/api/provider/services";
pub const PROVIDER_AVAILABILITY_PATH: &str = "/api/provider/availability";
pub const PROVIDER_BLOCKS_PATH: &str = "/api/provider/blocks";
pub const PROVIDER_APPOINTMENTS_PATH: &str = "/api/provider/appointments";

impl BookingApi for ApiClient {
    fn login<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, LoginResponse, ApiError> {
        Box::pin(async move {
            let body = LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            };
            self.post(LOGIN_PATH, None, &body).await
        })
    }

    fn register<'a>(&'a self, request: &'a RegisterRequest) -> BoxFuture<'a, (), ApiError> {
        Box::pin(async move {
            self.post_unit(REGISTER_PATH, None, request).await
        })
    }

    fn list_providers(&self) -> BoxFuture<'_, Vec<Provider>, ApiError> {
        Box::pin(async move {
            let envelope: ProvidersEnvelope = self.get(PROVIDERS_PATH, None, &[]).await?;
            Ok(envelope.providers.unwrap_or_default())
        })
    }

    fn get_provider<'a>(&'a self, provider_id: &'a str) -> BoxFuture<'a, Provider, ApiError> {
        Box::pin(async move {
            let path = format!("{}/{}", PROVIDERS_PATH, provider_id);
            let envelope: ProviderEnvelope = self.get(&path, None, &[]).await?;
            Ok(envelope.provider)
        })
    }

    fn list_appointments<'a>(
        &'a self,
        token: &'a str,
    ) -> BoxFuture<'a, Vec<Appointment>, ApiError> {
        Box::pin(async move {
            let envelope: AppointmentsEnvelope =
                self.get(APPOINTMENTS_PATH, Some(token), &[]).await?;
            Ok(envelope.appointments.unwrap_or_default())
        })
    }

    fn create_appointment<'a>(
        &'a self,
        token: &'a str,
        request: &'a NewAppointment,
    ) -> BoxFuture<'a, Appointment, ApiError> {
        Box::pin(async move {
            let envelope: AppointmentEnvelope =
                self.post(APPOINTMENTS_PATH, Some(token), request).await?;
            Ok(envelope.appointment)
        })
    }

    fn available_slots<'a>(&'a self, query: &'a SlotQuery) -> BoxFuture<'a, Vec<String>, ApiError> {
        Box::pin(async move {
            let params = [
                ("providerId", query.provider_id.as_str()),
                ("date", query.date.as_str()),
                ("serviceId", query.service_id.as_str()),
            ];
            let envelope: SlotsEnvelope = self.get(SLOTS_PATH, None, &params).await?;
            Ok(envelope.slots.unwrap_or_default())
        })
    }

    fn get_provider_config<'a>(
        &'a self,
        token: &'a str,
    ) -> BoxFuture<'a, ProviderConfig, ApiError> {
        Box::pin(async move {
            let body: Option<ConfigBody> = self.get(PROVIDER_CONFIG_PATH, Some(token), &[]).await?;
            Ok(body.unwrap_or_default().or(ProviderConfig::default()))
        })
    }

    fn save_provider_config<'a>(
        &'a self,
        token: &'a str,
        config: &'a ProviderConfig,
    ) -> BoxFuture<'a, ProviderConfig, ApiError> {
        Box::pin(async move {
            let body: Option<ConfigBody> =
                self.post(PROVIDER_CONFIG_PATH, Some(token), config).await?;
            Ok(body.unwrap_or_default().or(*config))
        })
    }

    fn list_provider_services<'a>(
        &'a self,
        token: &'a str,
    ) -> BoxFuture<'a, Vec<Service>, ApiError> {
        Box::pin(async move {
            let envelope: ServicesEnvelope =
                self.get(PROVIDER_SERVICES_PATH, Some(token), &[]).await?;
            Ok(envelope.services.unwrap_or_default())
        })
    }

    fn create_provider_service<'a>(
        &'a self,
        token: &'a str,
        service: &'a NewService,
    ) -> BoxFuture<'a, Service, ApiError> {
        Box::pin(async move {
            let envelope: ServiceEnvelope =
                self.post(PROVIDER_SERVICES_PATH, Some(token), service).await?;
            Ok(envelope.service)
        })
    }

    fn delete_provider_service<'a>(
        &'a self,
        token: &'a str,
        service_id: &'a str,
    ) -> BoxFuture<'a, (), ApiError> {
        Box::pin(async move {
            let path = format!("{}/{}", PROVIDER_SERVICES_PATH, service_id);
            self.delete(&path, Some(token)).await
        })
    }

    fn list_availabilities<'a>(
        &'a self,
        token: &'a str,
    ) -> BoxFuture<'a, Vec<ProviderAvailability>, ApiError> {
        Box::pin(async move {
            let envelope: AvailabilitiesEnvelope =
                self.get(PROVIDER_AVAILABILITY_PATH, Some(token), &[]).await?;
            Ok(envelope.availabilities.unwrap_or_default())
        })
    }

    fn create_availability<'a>(
        &'a self,
        token: &'a str,
        availability: &'a NewAvailability,
    ) -> BoxFuture<'a, ProviderAvailability, ApiError> {
        Box::pin(async move {
            let envelope: AvailabilityEnvelope = self
                .post(PROVIDER_AVAILABILITY_PATH, Some(token), availability)
                .await?;
            Ok(envelope.availability)
        })
    }

    fn delete_availability<'a>(
        &'a self,
        token: &'a str,
        availability_id: &'a str,
    ) -> BoxFuture<'a, (), ApiError> {
        Box::pin(async move {
            let path = format!("{}/{}", PROVIDER_AVAILABILITY_PATH, availability_id);
            self.delete(&path, Some(token)).await
        })
    }

    fn list_blocks<'a>(&'a self, token: &'a str) -> BoxFuture<'a, Vec<ProviderBlock>, ApiError> {
        Box::pin(async move {
            let envelope: BlocksEnvelope =
                self.get(PROVIDER_BLOCKS_PATH, Some(token), &[]).await?;
            Ok(envelope.blocks.unwrap_or_default())
        })
    }

    fn create_block<'a>(
        &'a self,
        token: &'a str,
        block: &'a NewBlock,
    ) -> BoxFuture<'a, ProviderBlock, ApiError> {
        Box::pin(async move {
            let envelope: BlockEnvelope = self.post(PROVIDER_BLOCKS_PATH, Some(token), block).await?;
            Ok(envelope.block)
        })
    }

    fn provider_appointments<'a>(
        &'a self,
        token: &'a str,
        date: &'a str,
    ) -> BoxFuture<'a, Vec<Appointment>, ApiError> {
        Box::pin(async move {
            let envelope: AppointmentsEnvelope = self
                .get(PROVIDER_APPOINTMENTS_PATH, Some(token), &[("date", date)])
                .await?;
            Ok(envelope.appointments.unwrap_or_default())
        })
    }
}
