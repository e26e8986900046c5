use crate::config::ClientConfig;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Error message when the configured timeout aborts a request.
pub const TIMEOUT_MESSAGE: &str = "Timeout in API request";
/// Error message for transport-level failures (statusCode 0).
pub const REQUEST_ERROR_MESSAGE: &str = "Error in API request";
/// Fallback when an error response carries no parsable message.
pub const GENERIC_RESPONSE_ERROR: &str = "Erro na requisição";

/// Uniform client-side error for every API failure mode.
///
/// `status_code` is the HTTP status for enveloped server errors, 408 for a
/// timeout abort, and 0 for transport or parse failures that never produced
/// a status.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
    pub status_code: u16,
    pub details: Option<Value>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status_code: u16, details: Option<Value>) -> Self {
        Self {
            message: message.into(),
            status_code,
            details,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.message, self.status_code)
    }
}

impl std::error::Error for ApiError {}

/// Generic JSON API client with a configured base URL and timeout.
///
/// Every call is independent; there is no coalescing and no retry. Non-2xx
/// responses are parsed as the backend's error envelope and surfaced as an
/// [`ApiError`] carrying the envelope message and full payload.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new `ApiClient` from the client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ApiError::new(REQUEST_ERROR_MESSAGE, 0, Some(Value::String(e.to_string())))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Generic POST with default JSON headers.
    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        self.request(endpoint, body, HeaderMap::new()).await
    }

    /// Generic POST with caller-supplied headers merged over the defaults.
    /// The JSON content type stays in place unless the caller explicitly
    /// sets their own.
    pub async fn post_with_headers<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &impl Serialize,
        headers: HeaderMap,
    ) -> Result<T, ApiError> {
        self.request(endpoint, body, headers).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &impl Serialize,
        extra_headers: HeaderMap,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(extra_headers);

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::new(TIMEOUT_MESSAGE, 408, None)
                } else {
                    ApiError::new(
                        REQUEST_ERROR_MESSAGE,
                        0,
                        Some(Value::String(e.to_string())),
                    )
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // An unparsable error body is a broken exchange, not a server
            // verdict: it gets the transport-failure shape (status 0), same
            // as a response that never arrived.
            let payload = response.json::<Value>().await.map_err(|e| {
                ApiError::new(REQUEST_ERROR_MESSAGE, 0, Some(Value::String(e.to_string())))
            })?;
            let message = payload
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(GENERIC_RESPONSE_ERROR)
                .to_string();
            return Err(ApiError::new(message, status.as_u16(), Some(payload)));
        }

        response.json::<T>().await.map_err(|e| {
            ApiError::new(REQUEST_ERROR_MESSAGE, 0, Some(Value::String(e.to_string())))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn client_creation() {
        let config = ClientConfig::new("http://localhost:3000", Duration::from_secs(10));
        assert!(ApiClient::new(&config).is_ok());
    }
}
