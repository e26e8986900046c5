use std::time::Duration;

/// Default client-side request timeout in milliseconds.
pub const DEFAULT_CLIENT_TIMEOUT_MS: u64 = 10_000;

/// Backend configuration, loaded once at process start and passed down.
///
/// Business logic never reads the environment directly; everything it needs
/// travels through this struct.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub frontend_url: String,
    pub crm_api_url: String,
    pub crm_end_point: String,
    pub crm_api_key: String,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            crm_api_url: std::env::var("CRM_API_URL")
                .map_err(|_| anyhow::anyhow!("CRM_API_URL environment variable required"))
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("CRM_API_URL cannot be empty");
                    }
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("CRM_API_URL must start with http:// or https://");
                    }
                    Ok(url)
                })?,
            crm_end_point: std::env::var("CRM_END_POINT")
                .map_err(|_| anyhow::anyhow!("CRM_END_POINT environment variable required"))
                .and_then(|endpoint| {
                    if endpoint.trim().is_empty() {
                        anyhow::bail!("CRM_END_POINT cannot be empty");
                    }
                    Ok(endpoint)
                })?,
            crm_api_key: std::env::var("CRM_API_KEY")
                .map_err(|_| anyhow::anyhow!("CRM_API_KEY environment variable required"))
                .and_then(|key| {
                    if key.trim().is_empty() {
                        anyhow::bail!("CRM_API_KEY cannot be empty");
                    }
                    Ok(key)
                })?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("CRM API URL: {}", config.crm_api_url);
        tracing::debug!("CRM endpoint: {}", config.crm_end_point);
        tracing::debug!("Frontend origin: {}", config.frontend_url);
        tracing::debug!("Server port: {}", config.port);

        Ok(config)
    }
}

/// Client-side configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("API_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "http://localhost:3000".to_string());
        let timeout_ms = std::env::var("API_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CLIENT_TIMEOUT_MS);

        Self::new(base_url, Duration::from_millis(timeout_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_config_defaults() {
        let config = ClientConfig::new("http://localhost:3000", Duration::from_millis(10_000));
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout, Duration::from_millis(DEFAULT_CLIENT_TIMEOUT_MS));
    }
}
