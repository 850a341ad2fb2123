//! Seeded synthetic datasets for the Panorama dashboard.
//!
//! Each generator derives an independent ChaCha8 stream from the sampling
//! seed, so calling it twice with equal `SampleOptions` reproduces an
//! identical table. Generators are total over their input domain: a zero
//! row count yields an empty table rather than an error.

pub mod errors;
pub mod export;
pub mod performance;
pub mod regional;
mod rng;
pub mod sales;
pub mod scatter;
pub mod share;
mod timeline;
pub mod timeseries;

pub use errors::ExportError;
pub use export::{ExportedTable, export_all, write_records_csv};
pub use performance::team_performance;
pub use regional::regional_summary;
pub use sales::monthly_sales;
pub use scatter::cluster_points;
pub use share::device_share;
pub use timeseries::price_history;
