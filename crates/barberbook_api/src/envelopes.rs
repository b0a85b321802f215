// --- File: crates/barberbook_api/src/envelopes.rs ---

// Response bodies wrap every payload in a named key. Lists may be missing or
// null; both read as empty.

use barberbook_common::models::{
    Appointment, Provider, ProviderAvailability, ProviderBlock, ProviderConfig, Service,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ProvidersEnvelope {
    #[serde(default)]
    pub providers: Option<Vec<Provider>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProviderEnvelope {
    pub provider: Provider,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppointmentsEnvelope {
    #[serde(default)]
    pub appointments: Option<Vec<Appointment>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppointmentEnvelope {
    pub appointment: Appointment,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SlotsEnvelope {
    #[serde(default)]
    pub slots: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServicesEnvelope {
    #[serde(default)]
    pub services: Option<Vec<Service>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServiceEnvelope {
    pub service: Service,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AvailabilitiesEnvelope {
    #[serde(default)]
    pub availabilities: Option<Vec<ProviderAvailability>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AvailabilityEnvelope {
    pub availability: ProviderAvailability,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BlocksEnvelope {
    #[serde(default)]
    pub blocks: Option<Vec<ProviderBlock>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BlockEnvelope {
    pub block: ProviderBlock,
}

/// The config endpoint answers with bare, possibly partial fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfigBody {
    #[serde(default)]
    pub max_booking_days: Option<u32>,
    #[serde(default)]
    pub cancel_booking_hours: Option<u32>,
}

impl ConfigBody {
    /// Fills missing fields from `fallback`.
    pub fn or(self, fallback: ProviderConfig) -> ProviderConfig {
        ProviderConfig {
            max_booking_days: self.max_booking_days.unwrap_or(fallback.max_booking_days),
            cancel_booking_hours: self
                .cancel_booking_hours
                .unwrap_or(fallback.cancel_booking_hours),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_and_missing_lists() {
        let missing: SlotsEnvelope = serde_json::from_value(json!({})).unwrap();
        let null: SlotsEnvelope = serde_json::from_value(json!({"slots": null})).unwrap();
        assert!(missing.slots.unwrap_or_default().is_empty());
        assert!(null.slots.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let body: ConfigBody = serde_json::from_value(json!({"maxBookingDays": 14})).unwrap();
        assert_eq!(
            body.or(ProviderConfig::default()),
            ProviderConfig {
                max_booking_days: 14,
                cancel_booking_hours: 2
            }
        );
    }
}
