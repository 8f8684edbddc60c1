//! Dataset loading from JSON files.
//!
//! This module provides the [`DatasetLoader`] type for loading and
//! validating the salary datasets from a data directory.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::{AllowanceRecord, GradeRecord, OfficialRecord, RegionalWageRecord};

use super::SalaryDatasets;

/// Loads and validates the salary datasets.
///
/// Records are deserialized into the strongly-typed models and checked
/// against the dataset invariants at this boundary; the aggregation
/// functions assume well-formed input and do not validate.
///
/// # Directory Structure
///
/// The data directory should have the following structure:
/// ```text
/// data/
/// ├── grades.json          # Grade (golongan) pay table
/// ├── allowances.json      # Performance-allowance table
/// ├── officials.json       # Public-official compensation table
/// └── regional_wages.json  # Regional minimum-wage table
/// ```
///
/// # Example
///
/// ```no_run
/// use gaji_engine::dataset::DatasetLoader;
///
/// let loader = DatasetLoader::load("./data")?;
/// let datasets = loader.datasets();
/// println!("{} allowance positions", datasets.allowances.len());
/// # Ok::<(), gaji_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    datasets: SalaryDatasets,
}

#[derive(Debug, Deserialize)]
struct GradesFile {
    grades: Vec<GradeRecord>,
}

#[derive(Debug, Deserialize)]
struct AllowancesFile {
    allowances: Vec<AllowanceRecord>,
}

#[derive(Debug, Deserialize)]
struct OfficialsFile {
    officials: Vec<OfficialRecord>,
}

#[derive(Debug, Deserialize)]
struct RegionalWagesFile {
    regions: Vec<RegionalWageRecord>,
}

impl DatasetLoader {
    /// Loads the datasets from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the data directory (e.g. "./data")
    ///
    /// # Returns
    ///
    /// Returns a `DatasetLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid JSON
    /// - Any record violates a dataset invariant
    ///
    /// Empty record arrays are valid; a dataset with no entries simply
    /// produces empty aggregation output.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let grades_file: GradesFile = Self::load_json(&path.join("grades.json"))?;
        let allowances_file: AllowancesFile = Self::load_json(&path.join("allowances.json"))?;
        let officials_file: OfficialsFile = Self::load_json(&path.join("officials.json"))?;
        let regions_file: RegionalWagesFile =
            Self::load_json(&path.join("regional_wages.json"))?;

        for grade in &grades_file.grades {
            validate_grade(grade)?;
        }
        for allowance in &allowances_file.allowances {
            validate_allowance(allowance)?;
        }

        info!(
            grades = grades_file.grades.len(),
            allowances = allowances_file.allowances.len(),
            officials = officials_file.officials.len(),
            regions = regions_file.regions.len(),
            "loaded salary datasets"
        );

        Ok(Self {
            datasets: SalaryDatasets {
                grades: grades_file.grades,
                allowances: allowances_file.allowances,
                officials: officials_file.officials,
                regional_wages: regions_file.regions,
            },
        })
    }

    /// Loads and parses a JSON file.
    fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "reading dataset file");

        let content = fs::read_to_string(path).map_err(|_| EngineError::DatasetNotFound {
            path: path_str.clone(),
        })?;

        serde_json::from_str(&content).map_err(|e| EngineError::DatasetParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded datasets.
    pub fn datasets(&self) -> &SalaryDatasets {
        &self.datasets
    }

    /// Consumes the loader, returning the datasets.
    pub fn into_datasets(self) -> SalaryDatasets {
        self.datasets
    }
}

/// Checks that a grade's service brackets are ordered with non-decreasing
/// pay.
fn validate_grade(grade: &GradeRecord) -> EngineResult<()> {
    for pair in grade.service_brackets.windows(2) {
        if pair[1].service_years < pair[0].service_years {
            return Err(EngineError::InvalidRecord {
                dataset: "grade".to_string(),
                id: grade.id.clone(),
                message: format!(
                    "service brackets out of order at {} years",
                    pair[1].service_years
                ),
            });
        }
        if pair[1].pay < pair[0].pay {
            return Err(EngineError::InvalidRecord {
                dataset: "grade".to_string(),
                id: grade.id.clone(),
                message: format!(
                    "bracket pay decreases at {} years of service",
                    pair[1].service_years
                ),
            });
        }
    }
    Ok(())
}

/// Checks that an allowance names at least one eligible grade.
fn validate_allowance(allowance: &AllowanceRecord) -> EngineResult<()> {
    if allowance.eligible_grades.is_empty() {
        return Err(EngineError::InvalidRecord {
            dataset: "allowance".to_string(),
            id: allowance.id.clone(),
            message: "eligible grade list is empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AllowanceCategory, LocalizedText, ServiceBracket};

    fn data_path() -> &'static str {
        "./tests/data"
    }

    #[test]
    fn test_load_valid_datasets() {
        let result = DatasetLoader::load(data_path());
        assert!(result.is_ok(), "Failed to load data: {:?}", result.err());

        let loader = result.unwrap();
        let datasets = loader.datasets();
        assert!(!datasets.grades.is_empty());
        assert!(!datasets.allowances.is_empty());
        assert!(!datasets.officials.is_empty());
        assert!(!datasets.regional_wages.is_empty());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = DatasetLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::DatasetNotFound { path }) => {
                assert!(path.contains("grades.json"));
            }
            _ => panic!("Expected DatasetNotFound error"),
        }
    }

    #[test]
    fn test_loaded_grades_keep_bracket_order() {
        let loader = DatasetLoader::load(data_path()).unwrap();

        for grade in &loader.datasets().grades {
            for pair in grade.service_brackets.windows(2) {
                assert!(pair[0].pay <= pair[1].pay);
            }
        }
    }

    #[test]
    fn test_validate_grade_rejects_decreasing_pay() {
        let grade = GradeRecord {
            id: "iii-a".to_string(),
            grade_code: "III/a".to_string(),
            rank_name: "Penata Muda".to_string(),
            base_pay: 2_785_700,
            description: LocalizedText::default(),
            service_brackets: vec![
                ServiceBracket {
                    service_years: 0,
                    pay: 2_785_700,
                },
                ServiceBracket {
                    service_years: 5,
                    pay: 2_700_000,
                },
            ],
        };

        let result = validate_grade(&grade);
        assert!(result.is_err());
        match result.unwrap_err() {
            EngineError::InvalidRecord { dataset, id, .. } => {
                assert_eq!(dataset, "grade");
                assert_eq!(id, "iii-a");
            }
            other => panic!("Expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_grade_rejects_unordered_brackets() {
        let grade = GradeRecord {
            id: "iii-a".to_string(),
            grade_code: "III/a".to_string(),
            rank_name: "Penata Muda".to_string(),
            base_pay: 2_785_700,
            description: LocalizedText::default(),
            service_brackets: vec![
                ServiceBracket {
                    service_years: 10,
                    pay: 3_091_900,
                },
                ServiceBracket {
                    service_years: 5,
                    pay: 3_091_900,
                },
            ],
        };

        assert!(validate_grade(&grade).is_err());
    }

    #[test]
    fn test_validate_allowance_rejects_empty_grades() {
        let allowance = AllowanceRecord {
            id: "tk_001".to_string(),
            ministry_code: "KEMENKEU".to_string(),
            ministry_name: LocalizedText::default(),
            position_name: LocalizedText::default(),
            eligible_grades: vec![],
            amount: 5_361_800,
            category: AllowanceCategory::Functional,
            regulations: vec![],
        };

        let result = validate_allowance(&allowance);
        assert!(result.is_err());
        match result.unwrap_err() {
            EngineError::InvalidRecord { dataset, .. } => assert_eq!(dataset, "allowance"),
            other => panic!("Expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_grade_accepts_flat_brackets() {
        let grade = GradeRecord {
            id: "i-a".to_string(),
            grade_code: "I/a".to_string(),
            rank_name: "Juru Muda".to_string(),
            base_pay: 1_685_700,
            description: LocalizedText::default(),
            service_brackets: vec![
                ServiceBracket {
                    service_years: 0,
                    pay: 1_685_700,
                },
                ServiceBracket {
                    service_years: 2,
                    pay: 1_685_700,
                },
            ],
        };

        assert!(validate_grade(&grade).is_ok());
    }
}
