

// --- File: crates/barberbook_common/src/lib.rs ---

// Declare modules within this crate
pub mod models;    // Domain records and request bodies
pub mod error;     // Error handling
pub mod http;      // HTTP utilities
pub mod services;  // Backend and session abstractions
pub mod logging;   // Logging utilities
pub mod time;      // Dates in the shop's time zone

// Re-export error types and utilities for easier access
pub use error::{
    ApiError,
    BarberbookError,
    config_error,
};

// Re-export HTTP utilities for easier access
pub use http::{
    MessageOrder,
    bearer,
    extract_error_message,
    client::{
        create_client,
        http_client,
        init_http_client,
    },
};

// Re-export logging utilities for easier access
pub use logging::{
    init,
    init_with_level,
    init_from_str,
    log_error,
};

pub use services::{BookingApi, BoxFuture, SessionService};

// This crate holds what every other BarberBook crate shares: the records the
// backend exchanges, error types, the shared HTTP client and the service traits.
