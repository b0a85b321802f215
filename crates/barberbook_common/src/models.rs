// --- File: crates/barberbook_common/src/models.rs ---

//! Domain records as the backend sends them.
//!
//! Every record here is a transient copy of server-owned data. Nothing is
//! validated locally: instants stay ISO strings exactly as received so they
//! can be sent back verbatim (a slot is booked with the same string the slot
//! list returned).

use serde::{Deserialize, Serialize};
use std::fmt;

/// The logged-in user as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_provider: bool,
}

/// An access token together with the user it belongs to.
///
/// Both parts are always present; a half-stored session reads as no session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: CurrentUser,
}

impl Session {
    pub fn new(token: impl Into<String>, user: CurrentUser) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    pub fn is_provider(&self) -> bool {
        self.user.is_provider
    }
}

/// A bookable service offered by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Minutes. The backend uses it as the slot length.
    pub duration: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub services: Vec<Service>,
}

/// `{id, name, email}` summary embedded in appointments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Appointment lifecycle state.
///
/// Two spellings circulate for the same states (`DONE`/`COMPLETED`,
/// `CANCELED`/`CANCELLED`); both decode. Values outside the known set decode
/// as `Unknown` instead of failing the surrounding list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Scheduled,
    #[serde(alias = "DONE")]
    Completed,
    #[serde(alias = "CANCELED")]
    Cancelled,
    Missed,
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Agendado",
            AppointmentStatus::Completed => "Concluído",
            AppointmentStatus::Cancelled => "Cancelado",
            AppointmentStatus::Missed => "Não compareceu",
            AppointmentStatus::Unknown => "Desconhecido",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    /// ISO 8601 instant.
    pub date: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub provider: Option<PersonSummary>,
    #[serde(default)]
    pub customer: Option<PersonSummary>,
    #[serde(default)]
    pub service: Option<Service>,
}

/// Recurring weekly opening window. `weekday` is 0 (Sunday) to 6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAvailability {
    pub id: String,
    pub weekday: u8,
    pub start_time: String,
    pub end_time: String,
}

/// One-off time off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderBlock {
    pub id: String,
    pub start_at: String,
    pub end_at: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Booking policy of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    pub max_booking_days: u32,
    pub cancel_booking_hours: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            max_booking_days: 7,
            cancel_booking_hours: 2,
        }
    }
}

// --- Request bodies ---

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: CurrentUser,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_provider: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub provider_id: String,
    pub service_id: String,
    /// The slot instant, exactly as the slot list returned it.
    pub date: String,
    pub notes: String,
}

/// Query of the slot endpoint. `date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotQuery {
    pub provider_id: String,
    pub date: String,
    pub service_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewService {
    pub name: String,
    pub duration: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAvailability {
    pub weekday: u8,
    pub start_time: String,
    pub end_time: String,
}

/// Time-off request. The bounds are passed through untouched; ordering is
/// the backend's concern. An absent reason is sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlock {
    pub start_at: String,
    pub end_at: String,
    pub reason: Option<String>,
}
