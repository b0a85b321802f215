// --- File: crates/barberbook_pages/src/lib.rs ---

//! Page controllers of the BarberBook client.
//!
//! One controller per screen. A controller is built from a [`PageContext`],
//! mounted once, and then driven by user actions. Each returns a
//! [`Navigation`] where the screen may send the user elsewhere; anonymous
//! visitors go to `/login` and customers on provider screens go to
//! `/dashboard`.

pub mod auth;
pub mod book;
pub mod booking;
pub mod context;
pub mod dashboard;
pub mod messages;
pub mod navbar;
pub mod provider_dashboard;
pub mod provider_settings;
pub mod remote;
pub mod routes;
pub mod slots;

pub use auth::{HomePage, LoginPage, RegisterPage};
pub use book::BookPage;
pub use booking::{is_conflict_message, BookingFlow, ProviderSource};
pub use context::{landing_route, require_provider, require_session, Navigation, PageContext};
pub use dashboard::DashboardPage;
pub use navbar::{NavAction, NavLink, Navbar};
pub use provider_dashboard::{AvailabilityForm, BlockForm, ProviderDashboardPage};
pub use provider_settings::{ProviderSettingsPage, ServiceForm};
pub use remote::{Feedback, Remote};
pub use routes::{Route, UnknownRoute};
pub use slots::SlotPicker;
