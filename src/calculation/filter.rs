//! Predicate-based filtering of combined records.

use serde::Deserialize;

use crate::models::{CombinedCategory, CombinedRecord};

/// An inclusive total-estimate range. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct AmountRange {
    /// Lower bound, in rupiah. `None` means unbounded below.
    #[serde(default)]
    pub min: Option<u64>,
    /// Upper bound, in rupiah. `None` means unbounded above.
    #[serde(default)]
    pub max: Option<u64>,
}

/// A filter specification over combined records.
///
/// Every predicate is optional: an empty set imposes no constraint (this
/// mirrors the "all" sentinel of the filter UI), and present predicates
/// combine with logical AND. The default value matches every record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SalaryFilter {
    /// Grade codes to keep. Empty means all grades.
    #[serde(default)]
    pub grade_codes: Vec<String>,
    /// Ministry names to keep. Empty means all ministries; base records
    /// (no ministry) never match a non-empty set.
    #[serde(default)]
    pub ministries: Vec<String>,
    /// Record categories to keep. Empty means all categories.
    #[serde(default)]
    pub categories: Vec<CombinedCategory>,
    /// Total-estimate range to keep.
    #[serde(default)]
    pub total_range: Option<AmountRange>,
}

impl SalaryFilter {
    /// Returns true if the record satisfies every present predicate.
    pub fn matches(&self, record: &CombinedRecord) -> bool {
        if !self.grade_codes.is_empty() && !self.grade_codes.contains(&record.grade_code) {
            return false;
        }

        if !self.ministries.is_empty() {
            match &record.ministry_name {
                Some(ministry) if self.ministries.contains(ministry) => {}
                _ => return false,
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&record.category) {
            return false;
        }

        if let Some(range) = &self.total_range {
            if record.total_estimate < range.min.unwrap_or(0) {
                return false;
            }
            if record.total_estimate > range.max.unwrap_or(u64::MAX) {
                return false;
            }
        }

        true
    }
}

/// Applies a filter specification, returning the matching records.
///
/// The input is never mutated; the result is a fresh collection preserving
/// input order. `filter(records, &SalaryFilter::default())` returns all
/// records.
///
/// # Examples
///
/// ```
/// use gaji_engine::calculation::{filter, SalaryFilter};
///
/// let records: Vec<gaji_engine::models::CombinedRecord> = vec![];
/// assert!(filter(&records, &SalaryFilter::default()).is_empty());
/// ```
pub fn filter(records: &[CombinedRecord], spec: &SalaryFilter) -> Vec<CombinedRecord> {
    records
        .iter()
        .filter(|record| spec.matches(record))
        .cloned()
        .collect()
}
