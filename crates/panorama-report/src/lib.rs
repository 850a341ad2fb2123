//! Presentation layer for Panorama.
//!
//! Builds plotly figures from the synthetic datasets and assembles them
//! into a static HTML dashboard with maud. All chart interactivity (pan,
//! zoom, hover, legend toggling) is handled by the plotly.js runtime in
//! the browser; this crate only describes the figures and the page.

pub mod charts;
pub mod errors;
pub mod kpi;
pub mod page;
pub mod theme;

pub use errors::RenderError;
pub use kpi::{KpiSummary, summarize};
pub use page::{Dashboard, Section, build_dashboard};
