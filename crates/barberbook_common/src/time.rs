// --- File: crates/barberbook_common/src/time.rs ---

//! Calendar helpers in the shop's time zone.
//!
//! Default dates ("today" on the agenda, "tomorrow" on the booking form) and
//! slot labels are all computed in one configured zone, not the zone of the
//! machine running the client.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use tracing::warn;

pub const DEFAULT_ZONE: Tz = chrono_tz::America::Sao_Paulo;

/// Format of every date sent to the backend.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an IANA zone name, falling back to São Paulo.
pub fn parse_zone(name: &str) -> Tz {
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            warn!("Unknown time zone '{}', using {}", name, DEFAULT_ZONE);
            DEFAULT_ZONE
        }
    }
}

pub fn today_in(tz: Tz, now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

pub fn tomorrow_in(tz: Tz, now: DateTime<Utc>) -> NaiveDate {
    let today = today_in(tz, now);
    today.checked_add_days(Days::new(1)).unwrap_or(today)
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).ok()
}

/// `HH:MM` label of a slot instant in the given zone.
///
/// Unparseable input is returned unchanged.
pub fn format_slot_time(instant: &str, tz: Tz) -> String {
    match DateTime::parse_from_rfc3339(instant) {
        Ok(dt) => dt.with_timezone(&tz).format("%H:%M").to_string(),
        Err(_) => instant.to_string(),
    }
}

/// `DD/MM/YYYY HH:MM` rendering of an instant, for appointment and block lists.
///
/// Naive `YYYY-MM-DDTHH:MM` values (what a datetime-local field produces) are
/// shown as written, without zone conversion.
pub fn format_local_datetime(value: &str, tz: Tz) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.with_timezone(&tz).format("%d/%m/%Y %H:%M").to_string();
    }
    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return naive.format("%d/%m/%Y %H:%M").to_string();
        }
    }
    value.to_string()
}
