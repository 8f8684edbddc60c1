//! Error types for the salary aggregation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading datasets.
//!
//! The aggregation functions themselves are total over well-typed input:
//! missing cross-references, empty collections, and unknown sort keys are
//! tolerated by contract and never surface as errors. Everything that can
//! fail happens at the dataset boundary.

use thiserror::Error;

/// The main error type for the salary aggregation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use gaji_engine::error::EngineError;
///
/// let error = EngineError::DatasetNotFound {
///     path: "/missing/grades.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Dataset file not found: /missing/grades.json");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A dataset file was not found at the specified path.
    #[error("Dataset file not found: {path}")]
    DatasetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A dataset file could not be parsed.
    #[error("Failed to parse dataset file '{path}': {message}")]
    DatasetParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A record violated a dataset invariant.
    #[error("Invalid {dataset} record '{id}': {message}")]
    InvalidRecord {
        /// The dataset the record belongs to (e.g. "grade").
        dataset: String,
        /// The id of the offending record.
        id: String,
        /// A description of the violated invariant.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
