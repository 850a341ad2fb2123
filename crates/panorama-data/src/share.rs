use std::f64::consts::TAU;

use panorama_core::{SampleOptions, ShareRecord};

/// Fixed device categories with their relative weights and colors.
pub const DEVICES: [(&str, i64, &str); 5] = [
    ("Desktop", 45, "#3498db"),
    ("Mobile", 35, "#e74c3c"),
    ("Tablet", 12, "#2ecc71"),
    ("Smart TV", 5, "#f39c12"),
    ("Other", 3, "#9b59b6"),
];

/// Generate the device-share table for the donut chart.
///
/// Percentages sum to 100 and the cumulative wedge angles span the full
/// circle, with the last `end_angle` landing on 2π.
pub fn device_share(_opts: &SampleOptions) -> Vec<ShareRecord> {
    let total: i64 = DEVICES.iter().map(|(_, value, _)| value).sum();
    let mut cumulative = 0.0;

    DEVICES
        .iter()
        .map(|(category, value, color)| {
            let fraction = *value as f64 / total as f64;
            let start_angle = cumulative;
            cumulative += fraction * TAU;
            ShareRecord {
                category: (*category).to_string(),
                value: *value,
                percentage: fraction * 100.0,
                start_angle,
                end_angle: cumulative,
                color: (*color).to_string(),
            }
        })
        .collect()
}
