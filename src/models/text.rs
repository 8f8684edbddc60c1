//! Bilingual text and locale selection.
//!
//! The source datasets carry every display string in both Indonesian and
//! English. Locale selection is an explicit parameter everywhere in the
//! engine; there is no global locale state.

use serde::{Deserialize, Serialize};

/// The display locale for bilingual fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Indonesian (Bahasa Indonesia).
    Id,
    /// English.
    En,
}

/// A string carried in both dataset languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// The Indonesian text. Also serves as the identity of the value where
    /// the datasets cross-reference by name.
    pub id: String,
    /// The English text.
    pub en: String,
}

impl LocalizedText {
    /// Returns the text for the requested locale.
    ///
    /// # Examples
    ///
    /// ```
    /// use gaji_engine::models::{Locale, LocalizedText};
    ///
    /// let name = LocalizedText {
    ///     id: "Kementerian Keuangan".to_string(),
    ///     en: "Ministry of Finance".to_string(),
    /// };
    /// assert_eq!(name.get(Locale::En), "Ministry of Finance");
    /// ```
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Id => &self.id,
            Locale::En => &self.en,
        }
    }
}
