use crate::config::Config;
use crate::models::{
    company::Company, error::AppError, health::HealthStatus, index::IndexSnapshot,
    sector::Sector, validate::Validate,
};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;

// ENDPOINTS
const INDEX_PATH: &str = "/api/v1/index/";
const SECTORS_PATH: &str = "/api/v1/sectors/";
const TOP_COMPANIES_PATH: &str = "/api/v1/companies/top";
const HEALTH_PATH: &str = "/api/v1/health";

// API CONFIGURATION
/// Connection settings for the market data API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    timeout: Duration,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn index_url(&self) -> String {
        self.endpoint(INDEX_PATH)
    }

    pub fn sectors_url(&self) -> String {
        self.endpoint(SECTORS_PATH)
    }

    pub fn top_companies_url(&self, limit: u32) -> String {
        format!("{}?limit={limit}", self.endpoint(TOP_COMPANIES_PATH))
    }

    pub fn health_url(&self) -> String {
        self.endpoint(HEALTH_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::API_BASE_URL.to_string());

        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_millis(Config::REQUEST_TIMEOUT_MS)),
        }
    }
}

// MARKET CLIENT
/// HTTP client for the KSE100 market data API.
pub struct MarketClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl MarketClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the current index snapshot.
    pub async fn fetch_index(&self) -> Result<IndexSnapshot, AppError> {
        self.fetch(&self.config.index_url()).await
    }

    /// Fetches the sector composition.
    pub async fn fetch_sectors(&self) -> Result<Vec<Sector>, AppError> {
        self.fetch(&self.config.sectors_url()).await
    }

    /// Fetches at most `limit` companies, ranked by market cap.
    pub async fn fetch_top_companies(&self, limit: u32) -> Result<Vec<Company>, AppError> {
        let companies: Vec<Company> = self.fetch(&self.config.top_companies_url(limit)).await?;
        check_limit(&companies, limit)?;
        Ok(companies)
    }

    /// Fetches the backend health payload.
    pub async fn check_health(&self) -> Result<HealthStatus, AppError> {
        self.fetch(&self.config.health_url()).await
    }

    /// Executes a single GET and decodes the body.
    async fn fetch<T>(&self, url: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned + Validate,
    {
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to read response: {e}")))?;

        decode(&body).inspect_err(|e| {
            gloo::console::warn!(format!("Rejected response from {url}: {e}"));
        })
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

/// Parses and validates a response body. Shape errors are data errors, not
/// transport errors.
pub fn decode<T>(body: &str) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_str(body)
        .map_err(|e| AppError::DataError(format!("Malformed response: {e}")))?;
    value.validate()?;
    Ok(value)
}

fn check_limit(companies: &[Company], limit: u32) -> Result<(), AppError> {
    if companies.len() > limit as usize {
        return Err(AppError::DataError(format!(
            "Expected at most {limit} companies, got {}",
            companies.len()
        )));
    }
    Ok(())
}

// CONVENIENCE FUNCTIONS
/// Fetches the index snapshot using default configuration.
pub async fn fetch_index() -> Result<IndexSnapshot, AppError> {
    MarketClient::new()?.fetch_index().await
}

/// Fetches sectors using default configuration.
pub async fn fetch_sectors() -> Result<Vec<Sector>, AppError> {
    MarketClient::new()?.fetch_sectors().await
}

/// Fetches the top `limit` companies using default configuration.
pub async fn fetch_top_companies(limit: u32) -> Result<Vec<Company>, AppError> {
    MarketClient::new()?.fetch_top_companies(limit).await
}

/// Fetches backend health using default configuration.
pub async fn check_health() -> Result<HealthStatus, AppError> {
    MarketClient::new()?.check_health().await
}
