//! Core data models for the salary aggregation engine.
//!
//! This module contains all the domain models used throughout the engine.
//! Records are immutable snapshots of the source datasets; derived types
//! (combined records, statistics) are constructed fresh on every pass.

mod allowance;
mod combined;
mod grade;
mod official;
mod regional;
mod text;

pub use allowance::{AllowanceCategory, AllowanceRecord, Regulation};
pub use combined::{CombinedCategory, CombinedRecord};
pub use grade::{GradeRecord, ServiceBracket};
pub use official::{NamedAllowance, OfficialLevel, OfficialRecord};
pub use regional::{CostOfLivingTier, RegionalWageRecord, WageType};
pub use text::{Locale, LocalizedText};
