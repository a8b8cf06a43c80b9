//! Shared random source for spawn patterns.
//!
//! Every effect that scatters points draws from this one generator, so a
//! seeded session replays identically.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

#[derive(Resource, Debug, Clone)]
pub struct SparkRng(pub Rng);

impl SparkRng {
    pub fn with_seed(seed: u64) -> Self {
        SparkRng(Rng::with_seed(seed))
    }
}

impl Default for SparkRng {
    fn default() -> Self {
        SparkRng(Rng::new())
    }
}

/// Sample a random f32 in `[min, max)`.
/// If the range is smaller than EPSILON, returns min directly.
#[inline]
pub fn random_f32_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    let range = max - min;
    if range < f32::EPSILON {
        return min;
    }
    min + rng.f32() * range
}

/// Sample a random f64 in `[min, max)`.
#[inline]
pub fn random_f64_range(rng: &mut Rng, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range < f64::EPSILON {
        return min;
    }
    min + rng.f64() * range
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_range_stays_in_bounds() {
        let mut rng = Rng::with_seed(1);
        for _ in 0..1000 {
            let v = random_f32_range(&mut rng, -2.0, 3.0);
            assert!((-2.0..3.0).contains(&v));
            let w = random_f64_range(&mut rng, 0.8, 1.2);
            assert!((0.8..1.2).contains(&w));
        }
    }

    #[test]
    fn test_random_range_degenerate_returns_min() {
        let mut rng = Rng::with_seed(1);
        assert_eq!(random_f32_range(&mut rng, 4.0, 4.0), 4.0);
        assert_eq!(random_f64_range(&mut rng, 1.5, 1.0), 1.5);
    }

    #[test]
    fn test_seeded_rngs_agree() {
        let mut a = SparkRng::with_seed(42);
        let mut b = SparkRng::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.0.u32(..), b.0.u32(..));
        }
    }
}
