// --- File: crates/barberbook_pages/src/routes.rs ---
use std::fmt;
use std::str::FromStr;

/// The client's screens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    ProviderDashboard,
    ProviderSettings,
    /// Booking page of one provider.
    Book(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::ProviderDashboard => "/provider/dashboard".to_string(),
            Route::ProviderSettings => "/provider/settings".to_string(),
            Route::Book(provider_id) => format!("/book/{}", provider_id),
        }
    }

    /// Screens that need a logged-in user.
    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }

    pub fn requires_provider(&self) -> bool {
        matches!(self, Route::ProviderDashboard | Route::ProviderSettings)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoute(pub String);

impl fmt::Display for UnknownRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no page at '{}'", self.0)
    }
}

impl std::error::Error for UnknownRoute {}

impl FromStr for Route {
    type Err = UnknownRoute;

    /// Parses a path; query strings, fragments and trailing slashes are ignored.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let without_query = raw.split(&['?', '#'][..]).next().unwrap_or_default();
        let segments: Vec<&str> = without_query
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["login"] => Ok(Route::Login),
            ["register"] => Ok(Route::Register),
            ["dashboard"] => Ok(Route::Dashboard),
            ["provider", "dashboard"] => Ok(Route::ProviderDashboard),
            ["provider", "settings"] => Ok(Route::ProviderSettings),
            ["book", provider_id] => Ok(Route::Book(provider_id.to_string())),
            _ => Err(UnknownRoute(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_parse_back() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::Dashboard,
            Route::ProviderDashboard,
            Route::ProviderSettings,
            Route::Book("p-42".to_string()),
        ];
        for route in routes {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!("/provider/settings/".parse::<Route>(), Ok(Route::ProviderSettings));
        assert_eq!("/book/p1?date=2025-05-06".parse::<Route>(), Ok(Route::Book("p1".to_string())));
        assert_eq!("".parse::<Route>(), Ok(Route::Home));
        assert!("/book".parse::<Route>().is_err());
        assert!("/admin".parse::<Route>().is_err());
    }

    #[test]
    fn test_access_rules() {
        assert!(!Route::Login.requires_session());
        assert!(Route::Book("p1".to_string()).requires_session());
        assert!(Route::ProviderSettings.requires_provider());
        assert!(!Route::Dashboard.requires_provider());
    }
}
