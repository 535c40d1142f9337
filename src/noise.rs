//! Random sources used to perturb generated sample prices.
//!
//! Generation never reaches for a global generator: the caller hands a
//! [`NoiseSource`] to [`DatasetGenerator::generate`](crate::DatasetGenerator::generate),
//! which makes noisy datasets reproducible whenever the source is.
//!
//! # Examples
//!
//! ```rust
//! use area_price::{FixedNoise, NoiseSource, RngNoise};
//!
//! // Seeded generator: same seed, same perturbations.
//! let mut a = RngNoise::seeded(7);
//! let mut b = RngNoise::seeded(7);
//! assert_eq!(a.perturbations(5, 100.0), b.perturbations(5, 100.0));
//!
//! // Fixed cycle of unit values mapped onto [-amplitude/2, amplitude/2].
//! let mut fixed = FixedNoise::new(vec![0.0, 0.5, 1.0]);
//! let noise = fixed.perturbations(3, 10.0);
//! assert_eq!(noise.to_vec(), vec![-5.0, 0.0, 5.0]);
//! ```

use crate::Vector;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies price perturbations for noisy dataset generation.
pub trait NoiseSource {
    /// Draws `n` values from `[-amplitude / 2, amplitude / 2]`.
    fn perturbations(&mut self, n: usize, amplitude: f64) -> Vector;
}

/// A source that never perturbs anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoNoise;

impl NoiseSource for NoNoise {
    fn perturbations(&mut self, n: usize, _amplitude: f64) -> Vector {
        Vector::zeros(n)
    }
}

/// Uniform noise drawn from any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngNoise<R> {
    rng: R,
}

impl<R: Rng> RngNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngNoise<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> NoiseSource for RngNoise<R> {
    fn perturbations(&mut self, n: usize, amplitude: f64) -> Vector {
        let half = amplitude.abs() / 2.0;
        Vector::random_using(n, Uniform::new_inclusive(-half, half), &mut self.rng)
    }
}

/// Replays a fixed cycle of unit values in `[0, 1]`.
///
/// A unit value `u` becomes the perturbation `(u - 0.5) * amplitude`, so
/// `0.0` and `1.0` hit the two edges of the noise band and `0.5` lands on
/// the model line. Values outside `[0, 1]` are clamped. The cycle position
/// carries over between calls.
#[derive(Clone, Debug, Default)]
pub struct FixedNoise {
    units: Vec<f64>,
    cursor: usize,
}

impl FixedNoise {
    pub fn new(units: Vec<f64>) -> Self {
        Self { units, cursor: 0 }
    }

    fn next_unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 0.5;
        }
        let u = self.units[self.cursor % self.units.len()];
        self.cursor += 1;
        u.clamp(0.0, 1.0)
    }
}

impl NoiseSource for FixedNoise {
    fn perturbations(&mut self, n: usize, amplitude: f64) -> Vector {
        let amplitude = amplitude.abs();
        Vector::from_shape_fn(n, |_| (self.next_unit() - 0.5) * amplitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_noise_is_zero() {
        let noise = NoNoise.perturbations(4, 1000.0);
        assert_eq!(noise.len(), 4);
        assert!(noise.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_rng_noise_within_band() {
        let mut source = RngNoise::seeded(42);
        let noise = source.perturbations(500, 200.0);

        assert_eq!(noise.len(), 500);
        assert!(noise.iter().all(|&x| (-100.0..=100.0).contains(&x)));
    }

    #[test]
    fn test_rng_noise_negative_amplitude_uses_magnitude() {
        let mut source = RngNoise::seeded(3);
        let noise = source.perturbations(100, -50.0);
        assert!(noise.iter().all(|&x| x.abs() <= 25.0));
    }

    #[test]
    fn test_rng_noise_reproducible() {
        let first = RngNoise::seeded(11).perturbations(10, 1.0);
        let second = RngNoise::seeded(11).perturbations(10, 1.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_noise_cycles_across_calls() {
        let mut source = FixedNoise::new(vec![0.0, 1.0]);
        let first = source.perturbations(3, 4.0);
        let second = source.perturbations(1, 4.0);

        assert_eq!(first.to_vec(), vec![-2.0, 2.0, -2.0]);
        assert_eq!(second.to_vec(), vec![2.0]);
    }

    #[test]
    fn test_fixed_noise_clamps_units() {
        let mut source = FixedNoise::new(vec![-3.0, 7.0]);
        let noise = source.perturbations(2, 10.0);
        assert_eq!(noise.to_vec(), vec![-5.0, 5.0]);
    }

    #[test]
    fn test_empty_fixed_noise_is_centered() {
        let mut source = FixedNoise::default();
        let noise = source.perturbations(3, 10.0);
        assert!(noise.iter().all(|&x| x == 0.0));
    }
}
