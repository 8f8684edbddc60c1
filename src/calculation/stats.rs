//! Grouped statistics over salary collections.
//!
//! This module provides a generic partition-and-summarize function plus the
//! ministry-level instantiation used by the allowance views.

use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{AllowanceRecord, Locale};

/// Summary statistics for one group of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupStats {
    /// Number of values in the group.
    pub count: usize,
    /// Smallest value.
    pub lowest: u64,
    /// Largest value.
    pub highest: u64,
    /// Arithmetic mean, rounded half-away-from-zero to the nearest rupiah.
    pub average: u64,
    /// The value at index `count / 2` of the ascending-sorted group.
    ///
    /// For even-sized groups this is the upper-middle element, not the
    /// midpoint average. Downstream consumers depend on this exact
    /// tie-break, so it must not be replaced with the textbook median.
    pub median: u64,
}

/// Partitions records by a key and summarizes a numeric field per partition.
///
/// The grouping key and the summarized value are both supplied as closures,
/// so the same function serves ministry, category, and region groupings.
///
/// # Arguments
///
/// * `records` - The records to partition
/// * `key_fn` - Extracts the partition key from a record
/// * `value_fn` - Extracts the summarized value from a record
///
/// # Examples
///
/// ```
/// use gaji_engine::calculation::group_stats;
///
/// let pays = [("III/a", 100u64), ("III/a", 300), ("III/b", 200)];
/// let stats = group_stats(&pays, |p| p.0.to_string(), |p| p.1);
///
/// assert_eq!(stats["III/a"].average, 200);
/// assert_eq!(stats["III/b"].count, 1);
/// ```
pub fn group_stats<R>(
    records: &[R],
    key_fn: impl Fn(&R) -> String,
    value_fn: impl Fn(&R) -> u64,
) -> HashMap<String, GroupStats> {
    let mut groups: HashMap<String, Vec<u64>> = HashMap::new();
    for record in records {
        groups.entry(key_fn(record)).or_default().push(value_fn(record));
    }

    groups
        .into_iter()
        .map(|(key, mut values)| {
            values.sort_unstable();
            (key, summarize(&values))
        })
        .collect()
}

/// Summarizes a non-empty ascending-sorted slice of values.
fn summarize(sorted: &[u64]) -> GroupStats {
    let count = sorted.len();
    let sum: u64 = sorted.iter().sum();
    let average = (Decimal::from(sum) / Decimal::from(count as u64))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or_default();

    GroupStats {
        count,
        lowest: sorted[0],
        highest: sorted[count - 1],
        average,
        median: sorted[count / 2],
    }
}

/// Aggregate allowance statistics for one ministry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinistryStats {
    /// Localized ministry name the group was keyed on.
    pub ministry_name: String,
    /// Short code of the ministry.
    pub ministry_code: String,
    /// Number of allowance positions in the ministry.
    pub position_count: usize,
    /// Median allowance amount (upper-middle element, see [`GroupStats`]).
    pub median: u64,
    /// Smallest allowance amount.
    pub lowest: u64,
    /// Largest allowance amount.
    pub highest: u64,
    /// Mean allowance amount, rounded to the nearest rupiah.
    pub average: u64,
    /// De-duplicated regulation titles backing the ministry's entries, in
    /// first-seen order.
    pub regulation_titles: Vec<String>,
}

/// Computes per-ministry allowance statistics.
///
/// Records are grouped by localized ministry name; each group is summarized
/// with [`group_stats`] semantics and carries the de-duplicated regulation
/// titles of its members. The result is sorted descending by median, with
/// ties broken by ministry name so the ordering is deterministic.
///
/// # Arguments
///
/// * `allowances` - The full performance-allowance dataset
/// * `locale` - Locale used for the grouping key and display name
pub fn ministry_stats(allowances: &[AllowanceRecord], locale: Locale) -> Vec<MinistryStats> {
    let mut groups: HashMap<String, Vec<&AllowanceRecord>> = HashMap::new();
    for allowance in allowances {
        groups
            .entry(allowance.ministry_name.get(locale).to_string())
            .or_default()
            .push(allowance);
    }

    let mut stats: Vec<MinistryStats> = groups
        .into_iter()
        .map(|(ministry_name, records)| {
            let mut values: Vec<u64> = records.iter().map(|r| r.amount).collect();
            values.sort_unstable();
            let summary = summarize(&values);

            let mut regulation_titles: Vec<String> = Vec::new();
            for record in &records {
                for title in record.regulation_titles() {
                    if !regulation_titles.contains(&title) {
                        regulation_titles.push(title);
                    }
                }
            }

            MinistryStats {
                ministry_name,
                ministry_code: records[0].ministry_code.clone(),
                position_count: summary.count,
                median: summary.median,
                lowest: summary.lowest,
                highest: summary.highest,
                average: summary.average,
                regulation_titles,
            }
        })
        .collect();

    stats.sort_by(|a, b| {
        b.median
            .cmp(&a.median)
            .then_with(|| a.ministry_name.cmp(&b.ministry_name))
    });
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AllowanceCategory, LocalizedText, Regulation};

    fn create_test_allowance(
        id: &str,
        ministry_code: &str,
        ministry_name: &str,
        amount: u64,
    ) -> AllowanceRecord {
        AllowanceRecord {
            id: id.to_string(),
            ministry_code: ministry_code.to_string(),
            ministry_name: LocalizedText {
                id: ministry_name.to_string(),
                en: ministry_name.to_string(),
            },
            position_name: LocalizedText {
                id: format!("Posisi {id}"),
                en: format!("Position {id}"),
            },
            eligible_grades: vec!["III/a".to_string()],
            amount,
            category: AllowanceCategory::Structural,
            regulations: vec![],
        }
    }

    /// ST-001: even-length groups report the upper-middle element
    #[test]
    fn test_median_of_even_group_is_upper_middle() {
        let allowances = vec![
            create_test_allowance("a", "KEMENKEU", "Keuangan", 100),
            create_test_allowance("b", "KEMENKEU", "Keuangan", 200),
            create_test_allowance("c", "KEMENKEU", "Keuangan", 300),
            create_test_allowance("d", "KEMENKEU", "Keuangan", 400),
        ];

        let stats = ministry_stats(&allowances, Locale::Id);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].median, 300);
    }

    /// ST-002: a singleton group has all four statistics equal
    #[test]
    fn test_singleton_group_statistics() {
        let allowances = vec![create_test_allowance("a", "KEMENKEU", "Keuangan", 5_361_800)];

        let stats = ministry_stats(&allowances, Locale::Id);
        let keuangan = &stats[0];
        assert_eq!(keuangan.lowest, 5_361_800);
        assert_eq!(keuangan.highest, 5_361_800);
        assert_eq!(keuangan.average, 5_361_800);
        assert_eq!(keuangan.median, 5_361_800);
        assert_eq!(keuangan.position_count, 1);
    }

    /// ST-003: average rounds half away from zero
    #[test]
    fn test_average_rounds_half_up() {
        let allowances = vec![
            create_test_allowance("a", "KEMENKEU", "Keuangan", 100),
            create_test_allowance("b", "KEMENKEU", "Keuangan", 101),
        ];

        // 100.5 rounds to 101, as the reference tables do.
        let stats = ministry_stats(&allowances, Locale::Id);
        assert_eq!(stats[0].average, 101);
    }

    #[test]
    fn test_groups_are_sorted_descending_by_median() {
        let allowances = vec![
            create_test_allowance("a", "KEMENPAN", "Pendayagunaan", 2_000_000),
            create_test_allowance("b", "KEMENKEU", "Keuangan", 5_361_800),
            create_test_allowance("c", "KEMENDAGRI", "Dalam Negeri", 3_500_000),
        ];

        let stats = ministry_stats(&allowances, Locale::Id);
        let names: Vec<_> = stats.iter().map(|s| s.ministry_name.as_str()).collect();
        assert_eq!(names, vec!["Keuangan", "Dalam Negeri", "Pendayagunaan"]);
    }

    #[test]
    fn test_regulation_titles_are_deduplicated() {
        let mut first = create_test_allowance("a", "KEMENKEU", "Keuangan", 100);
        first.regulations = vec![Regulation {
            title: "PMK 156/2024".to_string(),
            url: None,
        }];
        let mut second = create_test_allowance("b", "KEMENKEU", "Keuangan", 200);
        second.regulations = vec![
            Regulation {
                title: "PMK 156/2024".to_string(),
                url: None,
            },
            Regulation {
                title: "Perpres 98/2020".to_string(),
                url: None,
            },
        ];

        let stats = ministry_stats(&[first, second], Locale::Id);
        assert_eq!(
            stats[0].regulation_titles,
            vec!["PMK 156/2024", "Perpres 98/2020"]
        );
    }

    #[test]
    fn test_missing_regulations_synthesize_title() {
        let allowances = vec![create_test_allowance("a", "KEMENKEU", "Keuangan", 100)];

        let stats = ministry_stats(&allowances, Locale::Id);
        assert_eq!(stats[0].regulation_titles, vec!["PMK KEMENKEU 2024"]);
    }

    #[test]
    fn test_ministry_code_comes_from_first_record() {
        let allowances = vec![
            create_test_allowance("a", "KEMENKEU", "Keuangan", 100),
            create_test_allowance("b", "KEMENKEU-2", "Keuangan", 200),
        ];

        let stats = ministry_stats(&allowances, Locale::Id);
        assert_eq!(stats[0].ministry_code, "KEMENKEU");
    }

    #[test]
    fn test_group_stats_generic_partitioning() {
        #[derive(Clone)]
        struct Row {
            region: &'static str,
            wage: u64,
        }

        let rows = vec![
            Row { region: "Jawa", wage: 2_000_000 },
            Row { region: "Jawa", wage: 4_000_000 },
            Row { region: "Bali", wage: 2_813_672 },
        ];

        let stats = group_stats(&rows, |r| r.region.to_string(), |r| r.wage);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats["Jawa"].lowest, 2_000_000);
        assert_eq!(stats["Jawa"].highest, 4_000_000);
        assert_eq!(stats["Jawa"].average, 3_000_000);
        assert_eq!(stats["Bali"].median, 2_813_672);
    }

    #[test]
    fn test_group_stats_on_empty_input_is_empty() {
        let empty: [u64; 0] = [];
        let stats = group_stats(&empty, |v| v.to_string(), |v| *v);
        assert!(stats.is_empty());
    }
}
