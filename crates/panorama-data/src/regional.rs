use rand::Rng;

use panorama_core::{RegionalRecord, SampleOptions};

use crate::rng::stream_rng;

/// Fixed sales regions.
pub const REGIONS: [&str; 5] = [
    "North America",
    "Europe",
    "Asia Pacific",
    "Latin America",
    "Middle East",
];

/// Generate aggregate figures for each region.
///
/// Always returns exactly one row per region; the per-region draws are
/// independent of each other.
pub fn regional_summary(opts: &SampleOptions) -> Vec<RegionalRecord> {
    let mut rng = stream_rng(opts.seed, "regional");
    REGIONS
        .iter()
        .map(|region| RegionalRecord {
            region: (*region).to_string(),
            revenue: rng.random_range(100_000..500_000),
            growth: rng.random_range(-5.0..25.0),
            customers: rng.random_range(1_000..10_000),
            satisfaction: rng.random_range(3.5..5.0),
        })
        .collect()
}
