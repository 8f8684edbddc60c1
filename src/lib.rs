//! Salary Data Aggregation Engine for Indonesian civil-service pay data.
//!
//! This crate joins base-grade pay tables (gaji pokok) with
//! performance-allowance tables (tunjangan kinerja), computes grouped
//! statistics, filters/sorts/searches the combined set, and derives regional
//! minimum-wage figures. All aggregation is pure and synchronous over
//! immutable in-memory snapshots loaded from JSON datasets.

#![warn(missing_docs)]

pub mod calculation;
pub mod dataset;
pub mod error;
pub mod models;
