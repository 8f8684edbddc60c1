//! Side-by-side comparison of allowance selections.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::AllowanceRecord;

/// Maximum number of positions the comparison view places side by side.
pub const MAX_COMPARISON_ITEMS: usize = 4;

/// Summary statistics over a comparison selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonStats {
    /// Largest allowance amount in the selection.
    pub highest: u64,
    /// Smallest allowance amount in the selection.
    pub lowest: u64,
    /// Unrounded mean allowance amount.
    pub average: Decimal,
    /// Highest minus lowest.
    pub range: u64,
    /// Id of the first record carrying the highest amount.
    pub highest_id: String,
    /// Id of the first record carrying the lowest amount.
    pub lowest_id: String,
}

/// Summarizes a comparison selection.
///
/// Returns `None` for an empty selection. Ties on the extremes resolve to
/// the first record in selection order. The selection size is a caller
/// concern; the comparison UI caps it at [`MAX_COMPARISON_ITEMS`].
///
/// # Examples
///
/// ```
/// use gaji_engine::calculation::compare_allowances;
///
/// assert!(compare_allowances(&[]).is_none());
/// ```
pub fn compare_allowances(selection: &[AllowanceRecord]) -> Option<ComparisonStats> {
    let first = selection.first()?;

    let mut highest = first;
    let mut lowest = first;
    for record in &selection[1..] {
        if record.amount > highest.amount {
            highest = record;
        }
        if record.amount < lowest.amount {
            lowest = record;
        }
    }

    let sum: u64 = selection.iter().map(|record| record.amount).sum();
    let average = Decimal::from(sum) / Decimal::from(selection.len() as u64);

    Some(ComparisonStats {
        highest: highest.amount,
        lowest: lowest.amount,
        average,
        range: highest.amount - lowest.amount,
        highest_id: highest.id.clone(),
        lowest_id: lowest.id.clone(),
    })
}
