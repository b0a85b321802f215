// --- File: crates/barberbook_api/src/client.rs ---
use barberbook_common::{bearer, config_error, http_client, init_http_client, ApiError, BarberbookError};
use barberbook_config::{resolve_api_origin, AppConfig};
use barberbook_config::origin::trim_base;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// HTTP access to the booking backend.
///
/// Every path is resolved against one origin. The underlying `reqwest`
/// client is the process-wide one, so cookies the backend sets are sent back
/// on later calls. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct ApiClient {
    origin: String,
    client: Client,
}

impl ApiClient {
    /// A client on the shared HTTP client. Trailing slashes of `origin` are
    /// dropped.
    pub fn new(origin: impl AsRef<str>) -> Self {
        Self::with_client(origin, http_client().clone())
    }

    pub fn with_client(origin: impl AsRef<str>, client: Client) -> Self {
        Self {
            origin: trim_base(origin.as_ref()),
            client,
        }
    }

    /// Resolves the backend origin from configuration and initialises the
    /// shared client with the configured timeout.
    pub fn from_config(config: &AppConfig) -> Result<Self, BarberbookError> {
        let origin = resolve_api_origin(config).map_err(config_error)?;
        let client = init_http_client(config.api.timeout_secs)?;
        debug!(origin = %origin, "API client ready");
        Ok(Self::with_client(origin, client.clone()))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        debug!(method = %method, path = path, auth = token.is_some(), "API request");
        let builder = self.client.request(method, self.url(path));
        match token {
            Some(token) => builder.header(AUTHORIZATION, bearer(token)),
            None => builder,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut builder = self.request(Method::GET, path, token);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        decode(builder.send().await?).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .request(Method::POST, path, token)
            .json(body)
            .send()
            .await?;
        decode(response).await
    }

    /// POST whose reply body is not used: any 2xx counts as success.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, path, token)
            .json(body)
            .send()
            .await?;
        accept(response).await
    }

    pub(crate) async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, path, token).send().await?;
        accept(response).await
    }
}

fn rejection(status: StatusCode, bytes: &[u8]) -> ApiError {
    let body = serde_json::from_slice::<Value>(bytes).ok();
    warn!(status = status.as_u16(), "API request rejected");
    ApiError::Status {
        status: status.as_u16(),
        body,
    }
}

/// Checks the status only. The body of a 2xx reply may be anything, even
/// plain text like `OK`.
async fn accept(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    let bytes = response.bytes().await?;
    if !status.is_success() {
        return Err(rejection(status, &bytes));
    }
    Ok(())
}

/// Turns a response into `T`, or into [`ApiError::Status`] carrying the
/// parsed error body. An empty success body decodes as JSON `null`.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        return Err(rejection(status, &bytes));
    }

    let value: Value = if bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = ApiClient::with_client("https://api.example.com//", Client::new());
        assert_eq!(client.origin(), "https://api.example.com");
        assert_eq!(
            client.url("/api/providers"),
            "https://api.example.com/api/providers"
        );
    }

    #[test]
    fn test_from_config_rejects_missing_backend_in_production() {
        let mut config = AppConfig {
            run_env: "production".to_string(),
            ..AppConfig::default()
        };
        config.api.backend_url = None;
        config.api.base_url = None;
        let err = ApiClient::from_config(&config).unwrap_err();
        assert!(matches!(err, BarberbookError::ConfigError(_)));
    }
}
