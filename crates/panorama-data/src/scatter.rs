use rand::Rng;

use panorama_core::{SampleOptions, ScatterRecord};

use crate::rng::{gaussian, stream_rng};

/// Fixed cluster categories and their (x, y) centers.
pub const CLUSTERS: [(&str, f64, f64); 3] = [
    ("Category A", 30.0, 40.0),
    ("Category B", 60.0, 70.0),
    ("Category C", 80.0, 30.0),
];

const CLUSTER_SIGMA: f64 = 10.0;

/// Generate clustered scatter points.
///
/// The requested count is split evenly across the three clusters with
/// integer division, so the result holds `3 * (points / 3)` rows.
pub fn cluster_points(opts: &SampleOptions, points: usize) -> Vec<ScatterRecord> {
    let mut rng = stream_rng(opts.seed, "scatter");
    let per_cluster = points / CLUSTERS.len();
    let mut records = Vec::with_capacity(per_cluster * CLUSTERS.len());

    for (category, center_x, center_y) in CLUSTERS {
        for _ in 0..per_cluster {
            let x = gaussian(&mut rng, center_x, CLUSTER_SIGMA);
            let y = gaussian(&mut rng, center_y, CLUSTER_SIGMA);
            records.push(ScatterRecord {
                x,
                y,
                size: rng.random_range(5.0..20.0),
                category: category.to_string(),
                value: x * y / 100.0,
            });
        }
    }

    records
}
