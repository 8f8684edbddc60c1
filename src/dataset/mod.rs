//! Dataset loading and access for the salary engine.
//!
//! This module provides the [`DatasetLoader`] for reading the JSON datasets
//! from disk and the [`SalaryDatasets`] snapshot the aggregation functions
//! consume.
//!
//! # Example
//!
//! ```no_run
//! use gaji_engine::dataset::DatasetLoader;
//!
//! let loader = DatasetLoader::load("./data").unwrap();
//! println!("{} grades loaded", loader.datasets().grades.len());
//! ```

mod loader;

pub use loader::DatasetLoader;

use crate::models::{AllowanceRecord, GradeRecord, OfficialRecord, RegionalWageRecord};

/// The full set of salary datasets, held as an immutable in-memory snapshot.
///
/// The engine never mutates a snapshot; aggregation passes read it and
/// produce fresh collections. Concurrent readers need no synchronization.
#[derive(Debug, Clone, Default)]
pub struct SalaryDatasets {
    /// The grade (golongan) pay table.
    pub grades: Vec<GradeRecord>,
    /// The performance-allowance (tunjangan kinerja) table.
    pub allowances: Vec<AllowanceRecord>,
    /// The public-official compensation table.
    pub officials: Vec<OfficialRecord>,
    /// The regional minimum-wage table.
    pub regional_wages: Vec<RegionalWageRecord>,
}

impl SalaryDatasets {
    /// Looks up a grade record by id.
    pub fn find_grade(&self, id: &str) -> Option<&GradeRecord> {
        self.grades.iter().find(|grade| grade.id == id)
    }

    /// Returns the allowance records of one ministry.
    pub fn allowances_for_ministry(&self, ministry_code: &str) -> Vec<&AllowanceRecord> {
        self.allowances
            .iter()
            .filter(|allowance| allowance.ministry_code == ministry_code)
            .collect()
    }

    /// Finds the allowance for a ministry, position, and grade combination.
    ///
    /// The position is matched against the Indonesian position name, which
    /// doubles as its identifier in the source data. Returns `None` when no
    /// entry applies; an absent allowance is tolerated data, not an error.
    pub fn find_allowance(
        &self,
        ministry_code: &str,
        position: &str,
        grade_code: &str,
    ) -> Option<&AllowanceRecord> {
        self.allowances.iter().find(|allowance| {
            allowance.ministry_code == ministry_code
                && allowance.position_name.id == position
                && allowance
                    .eligible_grades
                    .iter()
                    .any(|eligible| eligible == grade_code)
        })
    }

    /// Looks up a regional wage record by id.
    pub fn find_region(&self, id: &str) -> Option<&RegionalWageRecord> {
        self.regional_wages.iter().find(|region| region.id == id)
    }
}
