use super::error::AppError;
use super::validate::{Validate, ensure_finite, ensure_present};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

/// Market session state reported by the exchange feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradingStatus {
    Open,
    Closed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TradingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TradingStatus::Open => "Open",
            TradingStatus::Closed => "Closed",
            TradingStatus::Unknown => "Unknown",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TradingStatus::Open => "status-dot open",
            TradingStatus::Closed | TradingStatus::Unknown => "status-dot closed",
        }
    }
}

/// Direction of the day's move, used for up/down styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Non-negative changes count as up.
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 { Trend::Up } else { Trend::Down }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }
}

/// KSE100 index snapshot as returned by `/api/v1/index/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndexSnapshot {
    pub symbol: String,
    pub name: String,
    pub value: f64,
    pub change: f64,
    pub change_percent: f64,
    pub previous_close: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
    pub market_cap: u64,
    pub year_high: f64,
    pub year_low: f64,
    pub ytd_change_percent: f64,
    pub constituent_count: u32,
    #[serde(default)]
    pub trading_status: TradingStatus,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub average_volume_30d: Option<u64>,
}

impl IndexSnapshot {
    pub fn trend(&self) -> Trend {
        Trend::from_change(self.change)
    }

    pub fn is_open(&self) -> bool {
        self.trading_status == TradingStatus::Open
    }
}

impl Validate for IndexSnapshot {
    fn validate(&self) -> Result<(), AppError> {
        ensure_present("index symbol", &self.symbol)?;
        ensure_present("index name", &self.name)?;

        [
            ("value", self.value),
            ("change", self.change),
            ("change_percent", self.change_percent),
            ("previous_close", self.previous_close),
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("year_high", self.year_high),
            ("year_low", self.year_low),
            ("ytd_change_percent", self.ytd_change_percent),
        ]
        .into_iter()
        .try_for_each(|(field, value)| ensure_finite(field, value))
    }
}

/// Accepts RFC 3339 timestamps as well as naive ISO 8601 ones, which are read as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = serde::Deserialize::deserialize(deserializer)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(dt.with_timezone(&Utc));
    }

    s.parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc())
        .map_err(|_| serde::de::Error::custom(format!("Failed to parse timestamp '{}'", s)))
}
