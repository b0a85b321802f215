// --- File: crates/barberbook_api/src/lib.rs ---

//! Client for the booking backend's `/api` endpoints.
//!
//! [`ApiClient`] implements [`barberbook_common::BookingApi`]; page
//! controllers only see the trait.

pub mod client;
pub mod endpoints;
mod envelopes;

pub use client::ApiClient;
