use rand::Rng;

use panorama_core::{SalesRecord, SampleOptions};

use crate::rng::{gaussian, stream_rng};
use crate::timeline::month_ends;

/// Fixed product categories covered by the sales dataset.
pub const PRODUCTS: [&str; 5] = [
    "Electronics",
    "Clothing",
    "Food & Beverages",
    "Home & Garden",
    "Sports",
];

const SALES_FLOOR: f64 = 1000.0;
const SEASONAL_AMPLITUDE: f64 = 5000.0;
const NOISE_SIGMA: f64 = 2000.0;

/// Generate monthly sales per product category.
///
/// Each product draws a base level, a linear trend, one full sinusoidal
/// seasonal cycle across the period, and Gaussian noise; the sum is floored
/// at 1000. Rows are ordered product-major, then by month-end date.
pub fn monthly_sales(opts: &SampleOptions, months: usize) -> Vec<SalesRecord> {
    let mut rng = stream_rng(opts.seed, "sales");
    let dates = month_ends(opts.base_date, months);
    let mut records = Vec::with_capacity(PRODUCTS.len() * months);

    for product in PRODUCTS {
        let base = rng.random_range(10_000..50_000) as f64;
        let trend_end = rng.random_range(-5_000..10_000) as f64;

        for (index, date) in dates.iter().enumerate() {
            let position = cycle_position(index, months);
            let trend = trend_end * position;
            let seasonal = SEASONAL_AMPLITUDE * (position * std::f64::consts::TAU).sin();
            let noise = gaussian(&mut rng, 0.0, NOISE_SIGMA);
            let sales = (base + trend + seasonal + noise).max(SALES_FLOOR) as i64;
            let divisor = rng.random_range(20..100);
            records.push(SalesRecord {
                date: *date,
                product: product.to_string(),
                sales,
                units: sales / divisor,
            });
        }
    }

    records
}

/// Position of `index` in [0, 1] across a period of `len` samples.
fn cycle_position(index: usize, len: usize) -> f64 {
    if len < 2 {
        0.0
    } else {
        index as f64 / (len - 1) as f64
    }
}
