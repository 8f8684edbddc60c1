//! Distribution bands and dataset-wide summaries.

use std::collections::HashSet;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{AllowanceRecord, GradeRecord, OfficialRecord, RegionalWageRecord};

/// One distribution band. `min` is inclusive, `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryBand {
    /// Display label of the band.
    pub label: &'static str,
    /// Inclusive lower bound, in rupiah.
    pub min: u64,
    /// Exclusive upper bound, in rupiah. `None` means unbounded.
    pub max: Option<u64>,
}

impl SalaryBand {
    /// Returns true if the amount falls within this band.
    pub fn contains(&self, amount: u64) -> bool {
        amount >= self.min && self.max.is_none_or(|max| amount < max)
    }
}

/// The distribution bands used by the salary charts.
pub const SALARY_BANDS: [SalaryBand; 5] = [
    SalaryBand { label: "< 2M", min: 0, max: Some(2_000_000) },
    SalaryBand { label: "2-3M", min: 2_000_000, max: Some(3_000_000) },
    SalaryBand { label: "3-4M", min: 3_000_000, max: Some(4_000_000) },
    SalaryBand { label: "4-5M", min: 4_000_000, max: Some(5_000_000) },
    SalaryBand { label: "> 5M", min: 5_000_000, max: None },
];

/// Count of grades whose base pay falls within a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandCount {
    /// Display label of the band.
    pub label: &'static str,
    /// Number of grades in the band.
    pub count: usize,
}

/// Counts grade base pays per distribution band.
///
/// Every band appears in the result, including empty ones, in
/// [`SALARY_BANDS`] order.
pub fn salary_distribution(grades: &[GradeRecord]) -> Vec<BandCount> {
    SALARY_BANDS
        .iter()
        .map(|band| BandCount {
            label: band.label,
            count: grades
                .iter()
                .filter(|grade| band.contains(grade.base_pay))
                .count(),
        })
        .collect()
}

/// Dataset-wide summary of the regional wage table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalSummary {
    /// Number of regions in the dataset.
    pub region_count: usize,
    /// Number of regions with a positive year-over-year increase.
    pub increased_count: usize,
    /// Mean increase percent, rounded to two decimal places.
    pub average_increase_percent: Decimal,
    /// Sum of regional populations.
    pub total_population: u64,
}

/// Summarizes the regional wage dataset.
///
/// An empty dataset yields all-zero figures.
pub fn regional_summary(regions: &[RegionalWageRecord]) -> RegionalSummary {
    let increased_count = regions
        .iter()
        .filter(|region| region.increase_percent > Decimal::ZERO)
        .count();
    let total_population = regions.iter().map(|region| region.population).sum();

    let average_increase_percent = if regions.is_empty() {
        Decimal::ZERO
    } else {
        let sum: Decimal = regions.iter().map(|region| region.increase_percent).sum();
        (sum / Decimal::from(regions.len() as u64))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };

    RegionalSummary {
        region_count: regions.len(),
        increased_count,
        average_increase_percent,
        total_population,
    }
}

/// Headline figures across all four datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformSummary {
    /// Number of grade records.
    pub grade_count: usize,
    /// Number of distinct ministry codes in the allowance dataset.
    pub ministry_count: usize,
    /// Number of official records.
    pub official_count: usize,
    /// Number of distinct provinces in the regional dataset.
    pub province_count: usize,
    /// Largest value across pooled base pays and allowance amounts.
    pub highest_salary: u64,
    /// Mean of pooled base pays and allowance amounts, rounded to the
    /// nearest rupiah.
    pub average_salary: u64,
}

/// Computes the headline figures shown on the browse dashboard.
///
/// The salary pool is the union of grade base pays and allowance amounts;
/// official compensation and regional wages only contribute counts.
pub fn platform_summary(
    grades: &[GradeRecord],
    allowances: &[AllowanceRecord],
    officials: &[OfficialRecord],
    regions: &[RegionalWageRecord],
) -> PlatformSummary {
    let ministry_count = allowances
        .iter()
        .map(|allowance| allowance.ministry_code.as_str())
        .collect::<HashSet<_>>()
        .len();
    let province_count = regions
        .iter()
        .map(|region| region.province.id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let pool: Vec<u64> = grades
        .iter()
        .map(|grade| grade.base_pay)
        .chain(allowances.iter().map(|allowance| allowance.amount))
        .collect();

    let highest_salary = pool.iter().max().copied().unwrap_or(0);
    let average_salary = if pool.is_empty() {
        0
    } else {
        let sum: u64 = pool.iter().sum();
        (Decimal::from(sum) / Decimal::from(pool.len() as u64))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .unwrap_or_default()
    };

    PlatformSummary {
        grade_count: grades.len(),
        ministry_count,
        official_count: officials.len(),
        province_count,
        highest_salary,
        average_salary,
    }
}
