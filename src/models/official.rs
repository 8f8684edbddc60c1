//! Public-official compensation model and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::LocalizedText;

/// The level of government an official serves at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficialLevel {
    /// National-level officials (president, ministers).
    National,
    /// Provincial-level officials (governors).
    Provincial,
    /// City/regency-level officials (mayors, regents).
    CityRegency,
    /// Legislative members.
    Legislative,
}

/// A named supplemental payment attached to an official position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedAllowance {
    /// Bilingual allowance name.
    pub name: LocalizedText,
    /// Monthly amount, in rupiah.
    pub amount: u64,
}

/// Compensation record for one public-official position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficialRecord {
    /// Unique identifier for the position.
    pub id: String,
    /// Bilingual position title.
    pub position: LocalizedText,
    /// The level of government.
    pub level: OfficialLevel,
    /// Monthly base pay, in rupiah.
    pub base_pay: u64,
    /// Named supplemental payments.
    #[serde(default)]
    pub allowances: Vec<NamedAllowance>,
    /// Total monthly compensation as published, in rupiah.
    pub total_compensation: u64,
    /// Date the record was last updated.
    pub last_updated: NaiveDate,
    /// The publication the figures were taken from.
    pub source: String,
}

impl OfficialRecord {
    /// Returns the sum of the named allowance amounts.
    pub fn allowance_total(&self) -> u64 {
        self.allowances.iter().map(|allowance| allowance.amount).sum()
    }
}
