// --- File: crates/barberbook_common/src/services.rs ---
//! Service abstractions for the backend and the session.
//!
//! Page controllers depend on these traits only. The HTTP implementation
//! lives in `barberbook-api`, the persistent session in `barberbook-session`;
//! tests plug in in-memory versions of both.

use std::future::Future;
use std::pin::Pin;
use tokio::sync::watch;

use crate::error::{ApiError, BarberbookError};
use crate::models::{
    Appointment, CurrentUser, LoginResponse, NewAppointment, NewAvailability, NewBlock,
    NewService, Provider, ProviderAvailability, ProviderBlock, ProviderConfig, RegisterRequest,
    Service, Session, SlotQuery,
};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Operations of the booking backend.
///
/// Calls that need a session take the access token explicitly; the
/// implementation attaches it as a bearer credential. Public calls take none.
pub trait BookingApi: Send + Sync {
    fn login<'a>(&'a self, email: &'a str, password: &'a str)
        -> BoxFuture<'a, LoginResponse, ApiError>;

    /// Creates an account. The response body is not used.
    fn register<'a>(&'a self, request: &'a RegisterRequest) -> BoxFuture<'a, (), ApiError>;

    fn list_providers(&self) -> BoxFuture<'_, Vec<Provider>, ApiError>;

    fn get_provider<'a>(&'a self, provider_id: &'a str) -> BoxFuture<'a, Provider, ApiError>;

    /// Appointments of the logged-in customer.
    fn list_appointments<'a>(&'a self, token: &'a str)
        -> BoxFuture<'a, Vec<Appointment>, ApiError>;

    fn create_appointment<'a>(
        &'a self,
        token: &'a str,
        request: &'a NewAppointment,
    ) -> BoxFuture<'a, Appointment, ApiError>;

    /// Free start instants (ISO strings) for the given provider, day and service.
    fn available_slots<'a>(&'a self, query: &'a SlotQuery) -> BoxFuture<'a, Vec<String>, ApiError>;

    fn get_provider_config<'a>(&'a self, token: &'a str)
        -> BoxFuture<'a, ProviderConfig, ApiError>;

    fn save_provider_config<'a>(
        &'a self,
        token: &'a str,
        config: &'a ProviderConfig,
    ) -> BoxFuture<'a, ProviderConfig, ApiError>;

    fn list_provider_services<'a>(&'a self, token: &'a str)
        -> BoxFuture<'a, Vec<Service>, ApiError>;

    fn create_provider_service<'a>(
        &'a self,
        token: &'a str,
        service: &'a NewService,
    ) -> BoxFuture<'a, Service, ApiError>;

    fn delete_provider_service<'a>(
        &'a self,
        token: &'a str,
        service_id: &'a str,
    ) -> BoxFuture<'a, (), ApiError>;

    fn list_availabilities<'a>(
        &'a self,
        token: &'a str,
    ) -> BoxFuture<'a, Vec<ProviderAvailability>, ApiError>;

    fn create_availability<'a>(
        &'a self,
        token: &'a str,
        availability: &'a NewAvailability,
    ) -> BoxFuture<'a, ProviderAvailability, ApiError>;

    fn delete_availability<'a>(
        &'a self,
        token: &'a str,
        availability_id: &'a str,
    ) -> BoxFuture<'a, (), ApiError>;

    fn list_blocks<'a>(&'a self, token: &'a str) -> BoxFuture<'a, Vec<ProviderBlock>, ApiError>;

    fn create_block<'a>(
        &'a self,
        token: &'a str,
        block: &'a NewBlock,
    ) -> BoxFuture<'a, ProviderBlock, ApiError>;

    /// The provider's agenda for one `YYYY-MM-DD` day.
    fn provider_appointments<'a>(
        &'a self,
        token: &'a str,
        date: &'a str,
    ) -> BoxFuture<'a, Vec<Appointment>, ApiError>;
}

/// Access to the persisted session.
///
/// Reads never fail: missing or corrupt state reads as `None`.
pub trait SessionService: Send + Sync {
    fn read(&self) -> Option<Session>;

    fn save(&self, token: &str, user: &CurrentUser) -> Result<(), BarberbookError>;

    fn clear(&self) -> Result<(), BarberbookError>;

    /// A receiver that observes every session change made through this
    /// service (and, for watched stores, changes made by other processes).
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;
}
