use super::error::AppError;
use super::validate::{Validate, ensure_finite, ensure_present};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sector {
    pub id: u32,
    pub name: String,
    pub market_cap: u64,
    pub weight_percent: f64,
    pub companies_count: u32,
    pub day_change_percent: f64,
    pub avg_pe_ratio: f64,
    pub color: String,
}

impl Sector {
    /// First whitespace-delimited token of the sector name.
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    /// Segment label, e.g. `Commercial 33.4%`.
    pub fn chart_label(&self) -> String {
        format!("{} {:.1}%", self.short_name(), self.weight_percent)
    }
}

impl Validate for Sector {
    fn validate(&self) -> Result<(), AppError> {
        ensure_present("sector name", &self.name)?;
        ensure_finite("weight_percent", self.weight_percent)?;
        ensure_finite("day_change_percent", self.day_change_percent)?;
        ensure_finite("avg_pe_ratio", self.avg_pe_ratio)?;

        if self.weight_percent < 0.0 {
            return Err(AppError::DataError(format!(
                "Sector '{}' has negative weight",
                self.name
            )));
        }
        Ok(())
    }
}

impl Validate for Vec<Sector> {
    fn validate(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for sector in self {
            sector.validate()?;
            if !seen.insert(sector.id) {
                return Err(AppError::DataError(format!(
                    "Duplicate sector id {}",
                    sector.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sector(id: u32, name: &str, weight: f64) -> Sector {
        Sector {
            id,
            name: name.to_string(),
            market_cap: 612_000_000_000,
            weight_percent: weight,
            companies_count: 8,
            day_change_percent: -0.89,
            avg_pe_ratio: 6.8,
            color: "#8884D8".to_string(),
        }
    }

    #[test]
    fn test_sector_parsing() {
        let json = r##"[{
            "id": 1,
            "name": "Commercial Banks",
            "market_cap": 2854000000000,
            "weight_percent": 33.4,
            "companies_count": 18,
            "day_change_percent": -0.65,
            "avg_pe_ratio": 4.2,
            "color": "#0088FE"
        }]"##;

        let sectors: Vec<Sector> = serde_json::from_str(json).unwrap();
        assert_eq!(sectors.len(), 1);
        assert_eq!(sectors[0].market_cap, 2_854_000_000_000);
        assert!(sectors.validate().is_ok());
    }

    #[test]
    fn test_chart_label() {
        assert_eq!(
            sector(2, "Oil & Gas Exploration Companies", 17.0).chart_label(),
            "Oil 17.0%"
        );
        assert_eq!(sector(5, "Cement", 7.25).short_name(), "Cement");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let sectors = vec![sector(1, "Cement", 7.2), sector(1, "Fertilizer", 8.7)];
        assert!(matches!(sectors.validate(), Err(AppError::DataError(_))));
    }

    #[test]
    fn test_negative_weight_rejected() {
        assert!(sector(1, "Cement", -1.0).validate().is_err());
    }
}
