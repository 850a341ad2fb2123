use rand::Rng;

use panorama_core::{PricePoint, SampleOptions};

use crate::rng::{gaussian, stream_rng};
use crate::timeline::days_from;

const START_PRICE: f64 = 100.0;
const PRICE_FLOOR: f64 = 10.0;
const STEP_SIGMA: f64 = 2.0;
const MOVING_AVG_WINDOW: usize = 7;

/// Generate a bounded random-walk price history.
///
/// The walk starts at 100, adds Gaussian steps, and never drops below 10.
/// `moving_avg` is the trailing 7-day simple mean and is absent until a
/// full window exists.
pub fn price_history(opts: &SampleOptions, days: usize) -> Vec<PricePoint> {
    let mut rng = stream_rng(opts.seed, "timeseries");

    let mut prices = Vec::with_capacity(days);
    let mut price = START_PRICE;
    for index in 0..days {
        if index > 0 {
            price = (price + gaussian(&mut rng, 0.0, STEP_SIGMA)).max(PRICE_FLOOR);
        }
        prices.push(price);
    }

    days_from(opts.base_date, days)
        .into_iter()
        .zip(prices.iter().copied())
        .enumerate()
        .map(|(index, (date, price))| PricePoint {
            date,
            price,
            volume: rng.random_range(100_000..1_000_000),
            high: price + rng.random_range(0.0..5.0),
            low: price - rng.random_range(0.0..5.0),
            moving_avg: trailing_mean(&prices, index, MOVING_AVG_WINDOW),
        })
        .collect()
}

/// Mean of the `window` prices ending at `index`, once a full window exists.
fn trailing_mean(prices: &[f64], index: usize, window: usize) -> Option<f64> {
    if index + 1 < window {
        return None;
    }
    let slice = &prices[index + 1 - window..=index];
    Some(slice.iter().sum::<f64>() / window as f64)
}
