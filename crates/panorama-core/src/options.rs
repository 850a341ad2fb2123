use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inputs that make every dataset reproducible.
///
/// All generators derive their random stream from `seed` and anchor any
/// calendar column to `base_date`, so two calls with equal options always
/// produce identical tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleOptions {
    /// Seed for the pseudo-random source.
    pub seed: u64,
    /// First day of the generated timeline.
    pub base_date: NaiveDate,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            base_date: default_base_date(),
        }
    }
}

impl SampleOptions {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

/// Row-count knobs for the sized datasets.
///
/// The categorical datasets (regions, teams, device share) have fixed
/// cardinality and take no size input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSizes {
    /// Number of monthly sales periods.
    pub months: usize,
    /// Number of days in the price history.
    pub days: usize,
    /// Requested scatter point count, split across three clusters.
    pub points: usize,
}

impl Default for DatasetSizes {
    fn default() -> Self {
        Self {
            months: 12,
            days: 90,
            points: 100,
        }
    }
}

fn default_base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_stable() {
        let opts = SampleOptions::default();
        assert_eq!(opts.seed, 42);
        assert_eq!(opts.base_date.to_string(), "2024-01-01");
    }

    #[test]
    fn with_seed_keeps_base_date() {
        let opts = SampleOptions::with_seed(7);
        assert_eq!(opts.seed, 7);
        assert_eq!(opts.base_date, SampleOptions::default().base_date);
    }
}
