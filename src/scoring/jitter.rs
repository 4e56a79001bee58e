use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random adjustment added to every score.
///
/// Injected into the scorer so tests and the CLI can pin results.
pub trait Jitter {
    /// Draw one adjustment for the given amplitude.
    fn sample(&mut self, amplitude: f64) -> f64;
}

/// Uniform draw from `(-amplitude, +amplitude]`.
#[derive(Debug, Clone)]
pub struct RandomJitter<R> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomJitter<StdRng> {
    /// Reproducible jitter for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Jitter for RandomJitter<R> {
    fn sample(&mut self, amplitude: f64) -> f64 {
        // random::<f64>() is in [0, 1), so this lands in (-a, a]
        amplitude - self.rng.random::<f64>() * 2.0 * amplitude
    }
}

/// Always returns the same adjustment, regardless of amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(pub f64);

impl Jitter for FixedJitter {
    fn sample(&mut self, _amplitude: f64) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_jitter_stays_in_band() {
        let mut jitter = RandomJitter::seeded(7);
        for _ in 0..10_000 {
            let value = jitter.sample(10.0);
            assert!(value > -10.0 && value <= 10.0, "out of band: {}", value);
        }
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let mut a = RandomJitter::seeded(42);
        let mut b = RandomJitter::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.sample(10.0), b.sample(10.0));
        }
    }

    #[test]
    fn test_zero_amplitude_is_zero() {
        let mut jitter = RandomJitter::seeded(1);
        assert_eq!(jitter.sample(0.0), 0.0);
    }

    #[test]
    fn test_fixed_jitter() {
        let mut jitter = FixedJitter(-3.5);
        assert_eq!(jitter.sample(10.0), -3.5);
        assert_eq!(jitter.sample(0.0), -3.5);
    }
}
