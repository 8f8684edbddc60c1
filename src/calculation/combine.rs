//! Grade/allowance join logic.
//!
//! This module produces the flat combined record set that the filter, sort,
//! search, and statistics functions operate on.

use crate::models::{
    AllowanceRecord, CombinedCategory, CombinedRecord, GradeRecord, Locale,
};

/// Flat supplemental allowance added to every estimate, in rupiah.
///
/// Covers the uniform general allowances (food, family) that are not broken
/// out per grade in the source datasets.
pub const SUPPLEMENTAL_ALLOWANCE: u64 = 500_000;

/// Joins grade records with allowance records into a combined record set.
///
/// The output contains one base record per grade (no allowance attached)
/// plus one joined record per (allowance, eligible grade) pair whose grade
/// code matches a grade record exactly. Allowance entries referencing grade
/// codes absent from `grades` are skipped; a missing grade reference is
/// absent data, not a fault.
///
/// Empty inputs yield an empty output. The result is a fresh collection on
/// every call; no input is mutated.
///
/// # Arguments
///
/// * `grades` - The full grade dataset
/// * `allowances` - The full performance-allowance dataset
/// * `locale` - Locale used for the ministry and position names carried on
///   joined records
///
/// # Examples
///
/// ```
/// use gaji_engine::calculation::{combine, SUPPLEMENTAL_ALLOWANCE};
/// use gaji_engine::models::{GradeRecord, Locale, LocalizedText};
///
/// let grades = vec![GradeRecord {
///     id: "iii-a".to_string(),
///     grade_code: "III/a".to_string(),
///     rank_name: "Penata Muda".to_string(),
///     base_pay: 2_785_700,
///     description: LocalizedText::default(),
///     service_brackets: vec![],
/// }];
///
/// let combined = combine(&grades, &[], Locale::Id);
/// assert_eq!(combined.len(), 1);
/// assert_eq!(combined[0].total_estimate, 2_785_700 + SUPPLEMENTAL_ALLOWANCE);
/// ```
pub fn combine(
    grades: &[GradeRecord],
    allowances: &[AllowanceRecord],
    locale: Locale,
) -> Vec<CombinedRecord> {
    let mut combined = Vec::with_capacity(grades.len());

    for grade in grades {
        combined.push(CombinedRecord {
            id: grade.id.clone(),
            grade_code: grade.grade_code.clone(),
            rank_name: grade.rank_name.clone(),
            base_pay: grade.base_pay,
            ministry_name: None,
            position_name: None,
            allowance_amount: None,
            total_estimate: grade.base_pay + SUPPLEMENTAL_ALLOWANCE,
            category: CombinedCategory::Base,
        });
    }

    for allowance in allowances {
        for grade_code in &allowance.eligible_grades {
            let Some(grade) = grades.iter().find(|g| g.grade_code == *grade_code) else {
                continue;
            };

            combined.push(CombinedRecord {
                id: format!("{}-{}", allowance.id, grade.id),
                grade_code: grade.grade_code.clone(),
                rank_name: grade.rank_name.clone(),
                base_pay: grade.base_pay,
                ministry_name: Some(allowance.ministry_name.get(locale).to_string()),
                position_name: Some(allowance.position_name.get(locale).to_string()),
                allowance_amount: Some(allowance.amount),
                total_estimate: grade.base_pay + allowance.amount + SUPPLEMENTAL_ALLOWANCE,
                category: allowance.category.into(),
            });
        }
    }

    combined
}
