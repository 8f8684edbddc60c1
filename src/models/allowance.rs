//! Performance-allowance (tunjangan kinerja) model and related types.

use serde::{Deserialize, Serialize};

use super::LocalizedText;

/// The category of position an allowance is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceCategory {
    /// Structural (management-track) positions.
    Structural,
    /// Functional (specialist-track) positions.
    Functional,
    /// Implementing (staff-level) positions.
    Implementing,
}

/// A regulation backing an allowance entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regulation {
    /// The regulation title (e.g. "PMK KEMENKEU 2024").
    pub title: String,
    /// Optional link to the regulation document.
    #[serde(default)]
    pub url: Option<String>,
}

/// One performance-allowance entry tied to a ministry and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceRecord {
    /// Unique identifier for the allowance record.
    pub id: String,
    /// Short code of the owning ministry (e.g. "KEMENKEU").
    pub ministry_code: String,
    /// Bilingual ministry name.
    pub ministry_name: LocalizedText,
    /// Bilingual position name.
    pub position_name: LocalizedText,
    /// Grade codes eligible for this allowance. Never empty in valid data.
    pub eligible_grades: Vec<String>,
    /// Monthly allowance amount, in rupiah.
    pub amount: u64,
    /// The position category.
    pub category: AllowanceCategory,
    /// Regulations backing the entry. May be empty in the source data.
    #[serde(default)]
    pub regulations: Vec<Regulation>,
}

impl AllowanceRecord {
    /// Returns the regulation titles backing this entry.
    ///
    /// Entries without explicit regulations synthesize the conventional
    /// `PMK {ministry_code} 2024` title used throughout the source data.
    pub fn regulation_titles(&self) -> Vec<String> {
        if self.regulations.is_empty() {
            vec![format!("PMK {} 2024", self.ministry_code)]
        } else {
            self.regulations
                .iter()
                .map(|regulation| regulation.title.clone())
                .collect()
        }
    }
}
