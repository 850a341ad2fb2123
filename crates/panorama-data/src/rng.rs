use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Derive the ChaCha8 stream for one dataset.
///
/// The label keeps the streams independent: every dataset sees the same
/// sequence regardless of which other datasets were generated before it.
pub(crate) fn stream_rng(seed: u64, label: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(mix_seed(seed, label))
}

fn mix_seed(seed: u64, label: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in label.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// Draw one Gaussian sample. A degenerate deviation yields the mean.
pub(crate) fn gaussian(rng: &mut ChaCha8Rng, mean: f64, std_dev: f64) -> f64 {
    Normal::new(mean, std_dev)
        .map(|normal| normal.sample(rng))
        .unwrap_or(mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_label_same_stream() {
        let mut a = stream_rng(42, "sales");
        let mut b = stream_rng(42, "sales");
        assert_eq!(a.random_range(0..1_000_000), b.random_range(0..1_000_000));
    }

    #[test]
    fn labels_separate_streams() {
        assert_ne!(mix_seed(42, "sales"), mix_seed(42, "regional"));
        assert_ne!(mix_seed(42, "sales"), mix_seed(43, "sales"));
    }

    #[test]
    fn gaussian_is_finite() {
        let mut rng = stream_rng(1, "test");
        for _ in 0..100 {
            assert!(gaussian(&mut rng, 0.0, 2.0).is_finite());
        }
    }
}
