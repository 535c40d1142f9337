//! Static configuration presets.
//!
//! Everything here is fixed when the controller is built; there is no
//! config file and no environment lookup.

use crate::dataset::{DatasetGenerator, Domain, GenerationMode};
use crate::error::{Error, Result};
use crate::linear_model::PriceModel;
use serde::{Deserialize, Serialize};

pub const SLOPE: f64 = 6834.0;
pub const INTERCEPT: f64 = 23803.0;

pub const AREA_MIN: f64 = 50.0;
pub const AREA_MAX: f64 = 200.0;
pub const DEFAULT_AREA: f64 = 100.0;
pub const DATASET_SIZE: usize = 11;

pub const NOISY_AREA_MIN: f64 = 20.0;
pub const NOISY_AREA_MAX: f64 = 400.0;
pub const NOISY_DATASET_SIZE: usize = 39;
pub const NOISY_STRIDE: f64 = 10.0;
pub const NOISE_AMPLITUDE: f64 = 400_000.0;

/// Range and granularity of the area input control.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaBounds {
    pub min: f64,
    pub max: f64,
    /// Input granularity, measured from `min`. `None` accepts any value.
    pub step: Option<f64>,
    pub default: f64,
}

impl AreaBounds {
    pub fn domain(&self) -> Domain {
        Domain::new(self.min, self.max)
    }

    pub fn validate(&self) -> Result<()> {
        self.domain().validate()?;
        if let Some(step) = self.step {
            if !(step.is_finite() && step > 0.0) {
                return Err(Error::InvalidDomain(format!(
                    "step must be positive, got {}",
                    step
                )));
            }
        }
        Ok(())
    }

    /// Clamps `area` into `[min, max]` and snaps interior values to the
    /// step grid. The bounds themselves are always reachable, even when
    /// they fall off the grid.
    pub fn constrain(&self, area: f64) -> f64 {
        if area <= self.min {
            return self.min;
        }
        if area >= self.max {
            return self.max;
        }
        match self.step {
            Some(step) => {
                let snapped = self.min + ((area - self.min) / step).round() * step;
                snapped.clamp(self.min, self.max)
            }
            None => area,
        }
    }
}

impl Default for AreaBounds {
    fn default() -> Self {
        Self {
            min: AREA_MIN,
            max: AREA_MAX,
            step: Some(1.0),
            default: DEFAULT_AREA,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub model: PriceModel,
    pub bounds: AreaBounds,
    pub dataset: DatasetGenerator,
}

impl Config {
    /// Exact reference points every 15 m² across 50–200 m².
    pub fn even() -> Self {
        let bounds = AreaBounds::default();
        Self {
            model: PriceModel::new(SLOPE, INTERCEPT),
            bounds,
            dataset: DatasetGenerator::new(DATASET_SIZE, bounds.domain()),
        }
    }

    /// Scattered reference points every 10 m² across 20–400 m².
    pub fn noisy() -> Self {
        let bounds = AreaBounds {
            min: NOISY_AREA_MIN,
            max: NOISY_AREA_MAX,
            step: Some(1.0),
            default: DEFAULT_AREA,
        };
        Self {
            model: PriceModel::new(SLOPE, INTERCEPT),
            bounds,
            dataset: DatasetGenerator::new(NOISY_DATASET_SIZE, bounds.domain())
                .stride(NOISY_STRIDE)
                .mode(GenerationMode::Noisy {
                    amplitude: NOISE_AMPLITUDE,
                }),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        self.dataset.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::even()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(Config::even().validate().is_ok());
        assert!(Config::noisy().validate().is_ok());
    }

    #[test]
    fn test_default_is_even() {
        let config = Config::default();
        assert_eq!(config.dataset.generation_mode(), GenerationMode::Even);
        assert_eq!(config.dataset.n_samples(), 11);
        assert_eq!(config.bounds.default, 100.0);
    }

    #[test]
    fn test_constrain_clamps() {
        let bounds = AreaBounds::default();
        assert_eq!(bounds.constrain(40.0), 50.0);
        assert_eq!(bounds.constrain(210.0), 200.0);
        assert_eq!(bounds.constrain(f64::INFINITY), 200.0);
    }

    #[test]
    fn test_constrain_snaps_to_step() {
        let bounds = AreaBounds {
            step: Some(5.0),
            ..AreaBounds::default()
        };
        assert_eq!(bounds.constrain(72.0), 70.0);
        assert_eq!(bounds.constrain(73.0), 75.0);
        assert_eq!(bounds.constrain(120.0), 120.0);
    }

    #[test]
    fn test_constrain_without_step_keeps_fraction() {
        let bounds = AreaBounds {
            step: None,
            ..AreaBounds::default()
        };
        assert_eq!(bounds.constrain(123.45), 123.45);
    }

    #[test]
    fn test_snap_never_leaves_range() {
        let bounds = AreaBounds {
            min: 0.0,
            max: 10.0,
            step: Some(4.0),
            default: 0.0,
        };
        assert_eq!(bounds.constrain(9.9), 8.0);
        assert_eq!(bounds.constrain(11.0), 10.0);
        assert_eq!(bounds.constrain(bounds.constrain(11.0)), 10.0);
    }

    #[test]
    fn test_off_grid_max_is_reachable() {
        let bounds = AreaBounds {
            min: 50.0,
            max: 199.0,
            step: Some(4.0),
            default: 100.0,
        };
        assert_eq!(bounds.constrain(210.0), 199.0);
        assert_eq!(bounds.constrain(199.0), 199.0);
        assert_eq!(bounds.constrain(40.0), 50.0);
        assert_eq!(bounds.constrain(197.5), 198.0);
    }

    #[test]
    fn test_invalid_step() {
        let bounds = AreaBounds {
            step: Some(0.0),
            ..AreaBounds::default()
        };
        assert!(matches!(bounds.validate(), Err(Error::InvalidDomain(_))));
    }

    #[test]
    fn test_degenerate_bounds() {
        let config = Config {
            bounds: AreaBounds {
                min: 100.0,
                max: 100.0,
                step: None,
                default: 100.0,
            },
            ..Config::even()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidDomain(_))));
    }
}
