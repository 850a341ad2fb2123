//! Core contracts shared across the Panorama crates.
//!
//! This crate defines the record types for the synthetic datasets and the
//! sampling options that make every dataset reproducible. Fallible
//! operations live in the crates that own them, each with its own error
//! type.

pub mod options;
pub mod records;

pub use options::{DatasetSizes, SampleOptions};
pub use records::{
    PerformanceRecord, PricePoint, RegionalRecord, SalesRecord, ScatterRecord, ShareRecord,
};
