//! Aggregation and calculation logic for the salary engine.
//!
//! This module contains all the pure functions of the engine: the grade and
//! allowance join, grouped statistics, free-text search, predicate filtering,
//! named sort orders, comparison selections, distribution bands, regional
//! wage derivations, and take-home pay estimation. Every function returns a
//! fresh collection and never mutates its input, so repeated invocation with
//! identical input yields identical output.

mod combine;
mod comparison;
mod distribution;
mod filter;
mod regional_wage;
mod search;
mod sort;
mod stats;
mod take_home;

pub use combine::{SUPPLEMENTAL_ALLOWANCE, combine};
pub use comparison::{ComparisonStats, MAX_COMPARISON_ITEMS, compare_allowances};
pub use distribution::{
    BandCount, PlatformSummary, RegionalSummary, SALARY_BANDS, SalaryBand, platform_summary,
    regional_summary, salary_distribution,
};
pub use filter::{AmountRange, SalaryFilter, filter};
pub use regional_wage::{
    JAKARTA_REGION_ID, WageCalculation, calculate_wage, provinces, regions_in_province,
};
pub use search::search;
pub use sort::{SortKey, sort};
pub use stats::{GroupStats, MinistryStats, group_stats, ministry_stats};
pub use take_home::{
    Deductions, TAXABLE_THRESHOLD, TakeHomePay, calculate_take_home, income_tax_rate,
    insurance_rate,
};
