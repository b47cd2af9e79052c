use super::error::AppError;
use super::validate::{Validate, ensure_finite, ensure_present};
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    pub rank: u32,
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub market_cap: u64,
    pub pe_ratio: f64,
    pub dividend_yield: f64,
    pub eps: f64,
    pub volume: u64,
    pub year_high: f64,
    pub year_low: f64,
}

impl Company {
    /// Sort key for the given column.
    pub fn sort_key(&self, field: SortField) -> SortKey<'_> {
        match field {
            SortField::Rank => SortKey::Number(f64::from(self.rank)),
            SortField::Symbol => SortKey::Text(&self.symbol),
            SortField::Name => SortKey::Text(&self.name),
            SortField::Sector => SortKey::Text(&self.sector),
            SortField::Price => SortKey::Number(self.price),
            SortField::Change => SortKey::Number(self.change),
            SortField::ChangePercent => SortKey::Number(self.change_percent),
            SortField::MarketCap => SortKey::Number(self.market_cap as f64),
            SortField::PeRatio => SortKey::Number(self.pe_ratio),
            SortField::DividendYield => SortKey::Number(self.dividend_yield),
            SortField::Eps => SortKey::Number(self.eps),
            SortField::Volume => SortKey::Number(self.volume as f64),
            SortField::YearHigh => SortKey::Number(self.year_high),
            SortField::YearLow => SortKey::Number(self.year_low),
        }
    }
}

impl Validate for Company {
    fn validate(&self) -> Result<(), AppError> {
        ensure_present("company symbol", &self.symbol)?;
        ensure_present("company name", &self.name)?;

        if self.rank == 0 {
            return Err(AppError::DataError(format!(
                "Company '{}' has rank 0",
                self.symbol
            )));
        }

        [
            ("price", self.price),
            ("change", self.change),
            ("change_percent", self.change_percent),
            ("pe_ratio", self.pe_ratio),
            ("dividend_yield", self.dividend_yield),
            ("eps", self.eps),
            ("year_high", self.year_high),
            ("year_low", self.year_low),
        ]
        .into_iter()
        .try_for_each(|(field, value)| ensure_finite(field, value))
    }
}

impl Validate for Vec<Company> {
    fn validate(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for company in self {
            company.validate()?;
            if !seen.insert(company.symbol.as_str()) {
                return Err(AppError::DataError(format!(
                    "Duplicate company symbol {}",
                    company.symbol
                )));
            }
        }
        Ok(())
    }
}

/// Company table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    #[default]
    Rank,
    Symbol,
    Name,
    Sector,
    Price,
    Change,
    ChangePercent,
    MarketCap,
    PeRatio,
    DividendYield,
    Eps,
    Volume,
    YearHigh,
    YearLow,
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        &[
            SortField::Rank,
            SortField::Symbol,
            SortField::Name,
            SortField::Sector,
            SortField::Price,
            SortField::Change,
            SortField::ChangePercent,
            SortField::MarketCap,
            SortField::PeRatio,
            SortField::DividendYield,
            SortField::Eps,
            SortField::Volume,
            SortField::YearHigh,
            SortField::YearLow,
        ]
    }
}

/// A comparable view of one company attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
}

impl SortKey<'_> {
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (SortKey::Text(a), SortKey::Text(b)) => locale_compare(a, b),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Case-insensitive ordering; on case-only ties lowercase sorts first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
