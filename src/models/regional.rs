//! Regional minimum-wage (UMR/UMP) model and related types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LocalizedText;

/// The administrative level a minimum-wage entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageType {
    /// Province-wide minimum wage (UMP).
    Provincial,
    /// City minimum wage (UMK).
    City,
    /// Regency minimum wage.
    Regency,
}

/// Ordinal cost-of-living classification of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostOfLivingTier {
    /// Lowest cost of living.
    VeryLow,
    /// Below-average cost of living.
    Low,
    /// Average cost of living.
    Medium,
    /// Above-average cost of living.
    MediumHigh,
    /// High cost of living.
    High,
    /// Highest cost of living (the Jakarta baseline).
    VeryHigh,
}

impl CostOfLivingTier {
    /// Returns the cost multiplier for this tier, relative to Jakarta (1.0).
    ///
    /// Matches the published tier table, in which `High` (1.1) exceeds
    /// `VeryHigh` (1.0).
    pub fn cost_multiplier(&self) -> Decimal {
        match self {
            CostOfLivingTier::VeryLow => Decimal::new(6, 1),
            CostOfLivingTier::Low => Decimal::new(7, 1),
            CostOfLivingTier::Medium => Decimal::new(8, 1),
            CostOfLivingTier::MediumHigh => Decimal::new(9, 1),
            CostOfLivingTier::High => Decimal::new(11, 1),
            CostOfLivingTier::VeryHigh => Decimal::new(10, 1),
        }
    }
}

/// One province/city minimum-wage entry for a given year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalWageRecord {
    /// Unique identifier for the region (e.g. "dki-jakarta").
    pub id: String,
    /// Bilingual province name.
    pub province: LocalizedText,
    /// Bilingual city/regency name. Province-wide entries repeat the
    /// province name here.
    pub city: LocalizedText,
    /// Monthly minimum wage, in rupiah.
    pub minimum_wage: u64,
    /// The administrative level of the entry.
    pub wage_type: WageType,
    /// The date the wage takes effect.
    pub effective_date: NaiveDate,
    /// The previous year's minimum wage, in rupiah.
    pub previous_year_wage: u64,
    /// Year-over-year increase in percent. May be negative.
    pub increase_percent: Decimal,
    /// The region's cost-of-living tier.
    pub cost_of_living: CostOfLivingTier,
    /// Population of the region.
    pub population: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_regional_wage_record() {
        let json = r#"{
            "id": "dki-jakarta",
            "province": {"id": "DKI Jakarta", "en": "DKI Jakarta"},
            "city": {"id": "DKI Jakarta", "en": "DKI Jakarta"},
            "minimum_wage": 5067381,
            "wage_type": "provincial",
            "effective_date": "2025-01-01",
            "previous_year_wage": 4901798,
            "increase_percent": 3.38,
            "cost_of_living": "very_high",
            "population": 10562088
        }"#;

        let region: RegionalWageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(region.id, "dki-jakarta");
        assert_eq!(region.minimum_wage, 5_067_381);
        assert_eq!(region.wage_type, WageType::Provincial);
        assert_eq!(region.cost_of_living, CostOfLivingTier::VeryHigh);
        assert_eq!(region.increase_percent, dec("3.38"));
        assert_eq!(
            region.effective_date,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_cost_multiplier_table() {
        assert_eq!(CostOfLivingTier::VeryLow.cost_multiplier(), dec("0.6"));
        assert_eq!(CostOfLivingTier::Low.cost_multiplier(), dec("0.7"));
        assert_eq!(CostOfLivingTier::Medium.cost_multiplier(), dec("0.8"));
        assert_eq!(CostOfLivingTier::MediumHigh.cost_multiplier(), dec("0.9"));
        assert_eq!(CostOfLivingTier::High.cost_multiplier(), dec("1.1"));
        assert_eq!(CostOfLivingTier::VeryHigh.cost_multiplier(), dec("1.0"));
    }

    #[test]
    fn test_high_multiplier_exceeds_very_high() {
        // The published table is non-monotonic at the top; the engine keeps
        // it as-is. This test exists to catch any silent "correction".
        assert!(
            CostOfLivingTier::High.cost_multiplier()
                > CostOfLivingTier::VeryHigh.cost_multiplier()
        );
    }

    #[test]
    fn test_tier_ordering_is_ordinal() {
        assert!(CostOfLivingTier::VeryLow < CostOfLivingTier::Low);
        assert!(CostOfLivingTier::MediumHigh < CostOfLivingTier::High);
        assert!(CostOfLivingTier::High < CostOfLivingTier::VeryHigh);
    }

    #[test]
    fn test_negative_increase_percent_is_accepted() {
        let json = r#"{
            "id": "some-region",
            "province": {"id": "Papua", "en": "Papua"},
            "city": {"id": "Papua", "en": "Papua"},
            "minimum_wage": 3864696,
            "wage_type": "provincial",
            "effective_date": "2025-01-01",
            "previous_year_wage": 3900000,
            "increase_percent": -0.91,
            "cost_of_living": "medium",
            "population": 4303707
        }"#;

        let region: RegionalWageRecord = serde_json::from_str(json).unwrap();
        assert!(region.increase_percent < Decimal::ZERO);
    }
}
