//! Named sort orders for combined records.

use crate::models::CombinedRecord;

/// A recognized sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Total estimate, highest first.
    SalaryHigh,
    /// Total estimate, lowest first.
    SalaryLow,
    /// Grade code, lexicographic.
    GradeCode,
    /// Rank name, lexicographic.
    RankName,
}

impl SortKey {
    /// Parses a sort key from its wire name.
    ///
    /// Returns `None` for unrecognized names; callers treat that as a
    /// no-op rather than an error.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "salary_high" => Some(SortKey::SalaryHigh),
            "salary_low" => Some(SortKey::SalaryLow),
            "golongan" => Some(SortKey::GradeCode),
            "alphabetical" => Some(SortKey::RankName),
            _ => None,
        }
    }
}

/// Sorts records by a named key, returning a new collection.
///
/// Sorting is stable: records with equal keys keep their relative input
/// order. An unrecognized key returns the input order unchanged. The input
/// is never mutated.
///
/// # Examples
///
/// ```
/// use gaji_engine::calculation::sort;
///
/// let records: Vec<gaji_engine::models::CombinedRecord> = vec![];
/// assert!(sort(&records, "salary_high").is_empty());
/// ```
pub fn sort(records: &[CombinedRecord], key: &str) -> Vec<CombinedRecord> {
    let mut sorted = records.to_vec();
    match SortKey::parse(key) {
        Some(SortKey::SalaryHigh) => {
            sorted.sort_by(|a, b| b.total_estimate.cmp(&a.total_estimate));
        }
        Some(SortKey::SalaryLow) => {
            sorted.sort_by(|a, b| a.total_estimate.cmp(&b.total_estimate));
        }
        Some(SortKey::GradeCode) => sorted.sort_by(|a, b| a.grade_code.cmp(&b.grade_code)),
        Some(SortKey::RankName) => sorted.sort_by(|a, b| a.rank_name.cmp(&b.rank_name)),
        None => {}
    }
    sorted
}
