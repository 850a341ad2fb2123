use rand::Rng;

use panorama_core::{PerformanceRecord, SampleOptions};

use crate::rng::stream_rng;

/// Fixed teams covered by the performance dataset.
pub const TEAMS: [&str; 6] = [
    "Engineering",
    "Sales",
    "Marketing",
    "Operations",
    "Support",
    "HR",
];

/// Generate performance metrics for each team.
///
/// Always returns exactly one row per team. The three scores live on a
/// 0–100 scale within fixed sub-ranges.
pub fn team_performance(opts: &SampleOptions) -> Vec<PerformanceRecord> {
    let mut rng = stream_rng(opts.seed, "performance");
    TEAMS
        .iter()
        .map(|team| PerformanceRecord {
            team: (*team).to_string(),
            productivity: rng.random_range(70.0..100.0),
            quality: rng.random_range(80.0..99.0),
            efficiency: rng.random_range(65.0..95.0),
            headcount: rng.random_range(10..100),
        })
        .collect()
}
