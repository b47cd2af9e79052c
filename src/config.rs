/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the market data API, taken from `KSE100_API_URL` at build time
    pub const API_BASE_URL: &'static str = match option_env!("KSE100_API_URL") {
        Some(url) => url,
        None => "http://localhost:8000",
    };

    /// Display name shown in the header, taken from `KSE100_APP_NAME` at build time
    pub const APP_NAME: &'static str = match option_env!("KSE100_APP_NAME") {
        Some(name) => name,
        None => "StockGenie",
    };

    /// Per-request timeout in milliseconds
    pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

    /// Index snapshot polling interval in milliseconds (30 seconds)
    pub const INDEX_REFRESH_INTERVAL_MS: u32 = 30_000;

    /// Sector and company data stay fresh for 5 minutes
    pub const MARKET_STALE_TIME_MS: u32 = 300_000;

    /// Health payload stays fresh for 1 minute
    pub const HEALTH_STALE_TIME_MS: u32 = 60_000;

    /// Number of companies requested from the top-companies endpoint
    pub const DEFAULT_COMPANY_LIMIT: u32 = 30;
}
