//! Free-text search over combined records.

use crate::models::CombinedRecord;

/// Filters records by a case-insensitive substring query.
///
/// The query is matched against the grade code, rank name, ministry name,
/// and position name. An empty query returns the full set unchanged. The
/// input is never mutated; the result is a fresh collection.
///
/// # Examples
///
/// ```
/// use gaji_engine::calculation::search;
///
/// let records: Vec<gaji_engine::models::CombinedRecord> = vec![];
/// assert!(search(&records, "keuangan").is_empty());
/// ```
pub fn search(records: &[CombinedRecord], query: &str) -> Vec<CombinedRecord> {
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_query(record, &needle))
        .cloned()
        .collect()
}

fn matches_query(record: &CombinedRecord, needle: &str) -> bool {
    record.grade_code.to_lowercase().contains(needle)
        || record.rank_name.to_lowercase().contains(needle)
        || record
            .ministry_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(needle))
        || record
            .position_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(needle))
}
