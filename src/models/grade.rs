//! Grade (golongan) model and related types.
//!
//! A grade record describes one civil-service pay grade/rank combination
//! together with its service-year pay brackets.

use serde::{Deserialize, Serialize};

use super::LocalizedText;

/// Pay for a span of service years within a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBracket {
    /// Years of service from which this bracket applies.
    pub service_years: u32,
    /// Monthly base pay for this bracket, in rupiah.
    pub pay: u64,
}

/// Represents one civil-service pay grade/rank combination.
///
/// Grade records are loaded once from the dataset source and never created
/// or mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    /// Unique identifier for the grade record.
    pub id: String,
    /// The grade code (e.g. "III/a").
    pub grade_code: String,
    /// The rank name (pangkat) attached to the grade.
    pub rank_name: String,
    /// Monthly base pay at zero service years, in rupiah.
    pub base_pay: u64,
    /// Bilingual description of the grade.
    #[serde(default)]
    pub description: LocalizedText,
    /// Pay brackets ordered by service years, with non-decreasing pay.
    #[serde(default)]
    pub service_brackets: Vec<ServiceBracket>,
}

impl GradeRecord {
    /// Returns the base pay applicable at the given years of service.
    ///
    /// The last bracket whose `service_years` does not exceed `years` wins;
    /// with no applicable bracket the grade's `base_pay` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use gaji_engine::models::{GradeRecord, LocalizedText, ServiceBracket};
    ///
    /// let grade = GradeRecord {
    ///     id: "iii-a".to_string(),
    ///     grade_code: "III/a".to_string(),
    ///     rank_name: "Penata Muda".to_string(),
    ///     base_pay: 2_785_700,
    ///     description: LocalizedText::default(),
    ///     service_brackets: vec![
    ///         ServiceBracket { service_years: 0, pay: 2_785_700 },
    ///         ServiceBracket { service_years: 10, pay: 3_091_900 },
    ///     ],
    /// };
    /// assert_eq!(grade.pay_at_service_years(12), 3_091_900);
    /// ```
    pub fn pay_at_service_years(&self, years: u32) -> u64 {
        self.service_brackets
            .iter()
            .rfind(|bracket| bracket.service_years <= years)
            .map(|bracket| bracket.pay)
            .unwrap_or(self.base_pay)
    }
}
