//! Regional minimum-wage derivations.
//!
//! Derives per-unit-time figures, cost-of-living adjustment, and the
//! capital-region comparison from a single regional wage record.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Locale, RegionalWageRecord};

/// Dataset id of the capital-region record used as the comparison baseline.
pub const JAKARTA_REGION_ID: &str = "dki-jakarta";

/// Per-unit-time and comparison figures derived from one regional record.
///
/// Produced on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WageCalculation {
    /// Id of the region the calculation was made for.
    pub region_id: String,
    /// Monthly minimum wage, in rupiah.
    pub monthly_wage: u64,
    /// Monthly wage divided by a fixed 30-day month.
    pub daily_wage: Decimal,
    /// Daily wage divided by a fixed 8-hour day.
    pub hourly_wage: Decimal,
    /// Monthly wage times 12, in rupiah.
    pub annual_wage: u64,
    /// Monthly wage divided by the region's cost-of-living multiplier.
    pub cost_of_living_adjusted: Decimal,
    /// Monthly wage as a percentage of the baseline wage.
    pub baseline_percentage: Decimal,
    /// Monthly wage minus the baseline wage, in rupiah. Negative when the
    /// region pays less than the baseline.
    pub baseline_difference: i64,
}

/// Derives wage figures for one region.
///
/// The baseline comparison uses the record with id [`JAKARTA_REGION_ID`]
/// from `all_regions`. When that record is absent, or carries a zero wage,
/// the queried region's own wage becomes the baseline, which degrades the
/// comparison to 100% / zero difference instead of failing.
///
/// The region itself does not need to be present in `all_regions`.
///
/// # Arguments
///
/// * `region` - The region to calculate figures for
/// * `all_regions` - The full regional dataset, searched for the baseline
///
/// # Examples
///
/// ```
/// use gaji_engine::calculation::calculate_wage;
/// use gaji_engine::models::{
///     CostOfLivingTier, LocalizedText, RegionalWageRecord, WageType,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let region = RegionalWageRecord {
///     id: "jawa-tengah".to_string(),
///     province: LocalizedText { id: "Jawa Tengah".to_string(), en: "Central Java".to_string() },
///     city: LocalizedText { id: "Jawa Tengah".to_string(), en: "Central Java".to_string() },
///     minimum_wage: 3_000_000,
///     wage_type: WageType::Provincial,
///     effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     previous_year_wage: 2_900_000,
///     increase_percent: Decimal::new(345, 2),
///     cost_of_living: CostOfLivingTier::Low,
///     population: 36_516_035,
/// };
///
/// let calculation = calculate_wage(&region, &[]);
/// assert_eq!(calculation.daily_wage, Decimal::from(100_000));
/// assert_eq!(calculation.hourly_wage, Decimal::from(12_500));
/// assert_eq!(calculation.annual_wage, 36_000_000);
/// ```
pub fn calculate_wage(
    region: &RegionalWageRecord,
    all_regions: &[RegionalWageRecord],
) -> WageCalculation {
    let monthly = region.minimum_wage;
    // Fixed divisors, not calendar-accurate.
    let daily = Decimal::from(monthly) / Decimal::from(30);
    let hourly = daily / Decimal::from(8);
    let annual = monthly * 12;

    let adjusted = Decimal::from(monthly) / region.cost_of_living.cost_multiplier();

    let baseline = all_regions
        .iter()
        .find(|r| r.id == JAKARTA_REGION_ID)
        .map(|r| r.minimum_wage)
        .filter(|wage| *wage > 0)
        .unwrap_or(monthly);

    let percentage = if baseline == 0 {
        // Both the region and the baseline are zero; self-comparison.
        Decimal::from(100)
    } else {
        Decimal::from(monthly) / Decimal::from(baseline) * Decimal::from(100)
    };

    WageCalculation {
        region_id: region.id.clone(),
        monthly_wage: monthly,
        daily_wage: daily,
        hourly_wage: hourly,
        annual_wage: annual,
        cost_of_living_adjusted: adjusted,
        baseline_percentage: percentage,
        baseline_difference: monthly as i64 - baseline as i64,
    }
}

/// Returns the distinct province names in the dataset, sorted.
pub fn provinces(regions: &[RegionalWageRecord], locale: Locale) -> Vec<String> {
    let mut names: Vec<String> = regions
        .iter()
        .map(|region| region.province.get(locale).to_string())
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// Returns the regions of one province, sorted by city name.
pub fn regions_in_province<'a>(
    regions: &'a [RegionalWageRecord],
    province: &str,
    locale: Locale,
) -> Vec<&'a RegionalWageRecord> {
    let mut matching: Vec<&RegionalWageRecord> = regions
        .iter()
        .filter(|region| region.province.get(locale) == province)
        .collect();
    matching.sort_by(|a, b| a.city.get(locale).cmp(b.city.get(locale)));
    matching
}
