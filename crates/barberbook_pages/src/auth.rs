// --- File: crates/barberbook_pages/src/auth.rs ---

//! Home redirect, login and registration.

use barberbook_common::models::{RegisterRequest, Session};
use barberbook_common::{log_error, MessageOrder};
use tracing::info;

use crate::context::{landing_route, Navigation, PageContext};
use crate::messages;
use crate::routes::Route;

/// `/`: sends the visitor to the page for their role.
pub struct HomePage {
    ctx: PageContext,
}

impl HomePage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    pub fn mount(&self) -> Navigation {
        let target = match self.ctx.session.read() {
            Some(session) => landing_route(&session),
            None => Route::Login,
        };
        Navigation::redirect(target)
    }
}

pub struct LoginPage {
    ctx: PageContext,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub in_flight: bool,
}

impl LoginPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            email: String::new(),
            password: String::new(),
            error: None,
            in_flight: false,
        }
    }

    /// Logs in, stores the session and navigates by role.
    pub async fn submit(&mut self) -> Navigation {
        if self.in_flight {
            return Navigation::Stay;
        }
        self.error = None;
        self.in_flight = true;
        let result = self.ctx.api.login(&self.email, &self.password).await;
        self.in_flight = false;

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                log_error(&err, "Login failed");
                self.error = Some(err.user_message(messages::LOGIN_FAILED));
                return Navigation::Stay;
            }
        };

        if let Err(err) = self.ctx.session.save(&response.access_token, &response.user) {
            log_error(&err, "Could not store session");
            self.error = Some(messages::SESSION_SAVE_FAILED.to_string());
            return Navigation::Stay;
        }
        info!(user = %response.user.id, provider = response.user.is_provider, "Logged in");
        let session = Session::new(response.access_token, response.user);
        Navigation::redirect(landing_route(&session))
    }
}

pub struct RegisterPage {
    ctx: PageContext,
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_provider: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub in_flight: bool,
}

impl RegisterPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            is_provider: false,
            error: None,
            success: None,
            in_flight: false,
        }
    }

    /// Creates the account. On success the page shows a confirmation and
    /// sends the user to `/login`; the account is not logged in.
    pub async fn submit(&mut self) -> Navigation {
        if self.in_flight {
            return Navigation::Stay;
        }
        self.error = None;
        self.success = None;
        self.in_flight = true;
        let request = RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            is_provider: self.is_provider,
        };
        let result = self.ctx.api.register(&request).await;
        self.in_flight = false;

        match result {
            Ok(()) => {
                info!(provider = request.is_provider, "Account registered");
                self.success = Some(messages::REGISTER_SUCCESS.to_string());
                Navigation::redirect(Route::Login)
            }
            Err(err) => {
                log_error(&err, "Registration failed");
                self.error = Some(
                    err.user_message_with(MessageOrder::MessageFirst, messages::REGISTER_FAILED),
                );
                Navigation::Stay
            }
        }
    }
}
