//! Combined grade-and-allowance records.
//!
//! A combined record is one (grade × eligible allowance) pairing, or a grade
//! alone when no allowance applies. Combined records are constructed fresh on
//! every aggregation pass and never mutated in place.

use serde::{Deserialize, Serialize};

use super::AllowanceCategory;

/// The category of a combined record.
///
/// Either the category of the joined allowance, or [`CombinedCategory::Base`]
/// for a grade without an allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinedCategory {
    /// A grade record without an attached allowance.
    Base,
    /// Structural (management-track) positions.
    Structural,
    /// Functional (specialist-track) positions.
    Functional,
    /// Implementing (staff-level) positions.
    Implementing,
}

impl From<AllowanceCategory> for CombinedCategory {
    fn from(category: AllowanceCategory) -> Self {
        match category {
            AllowanceCategory::Structural => CombinedCategory::Structural,
            AllowanceCategory::Functional => CombinedCategory::Functional,
            AllowanceCategory::Implementing => CombinedCategory::Implementing,
        }
    }
}

/// One row of the combined salary table.
///
/// Invariant: `total_estimate >= base_pay`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRecord {
    /// Synthetic identifier. For joined records this is composed from the
    /// allowance and grade ids; base records reuse the grade id.
    pub id: String,
    /// The grade code (e.g. "III/a").
    pub grade_code: String,
    /// The rank name attached to the grade.
    pub rank_name: String,
    /// Monthly base pay, in rupiah.
    pub base_pay: u64,
    /// Localized ministry name, absent on base records.
    pub ministry_name: Option<String>,
    /// Localized position name, absent on base records.
    pub position_name: Option<String>,
    /// The joined allowance amount, absent on base records.
    pub allowance_amount: Option<u64>,
    /// Estimated monthly total, in rupiah.
    pub total_estimate: u64,
    /// The record category.
    pub category: CombinedCategory,
}

impl CombinedRecord {
    /// Returns true if this record carries a joined allowance.
    pub fn has_allowance(&self) -> bool {
        self.allowance_amount.is_some()
    }
}
