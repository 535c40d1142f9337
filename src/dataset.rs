use crate::Vector;
use crate::error::{Error, Result};
use crate::linear_model::PriceModel;
use crate::noise::NoiseSource;
use serde::{Deserialize, Serialize};

/// Closed interval of building areas, `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::InvalidDomain(format!(
                "bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(Error::InvalidDomain(format!(
                "min must be < max, got [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// One (area, price) observation. Read-only once created.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SamplePoint {
    area: f64,
    price: f64,
}

impl SamplePoint {
    pub(crate) fn new(area: f64, price: f64) -> Self {
        Self { area, price }
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dataset {
    points: Vec<SamplePoint>,
}

impl Dataset {
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn n_samples(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SamplePoint> {
        self.points.iter()
    }

    pub fn areas(&self) -> Vector {
        self.points.iter().map(SamplePoint::area).collect()
    }

    pub fn prices(&self) -> Vector {
        self.points.iter().map(SamplePoint::price).collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a SamplePoint;
    type IntoIter = std::slice::Iter<'a, SamplePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationMode {
    /// Prices lie exactly on the model line.
    #[default]
    Even,
    /// Prices are perturbed uniformly within `±amplitude / 2`.
    Noisy { amplitude: f64 },
}

/// Builds the reference dataset drawn next to the live prediction.
///
/// Areas are spread evenly over the domain, both ends included, unless a
/// stride is set, in which case they step from `min` by that stride and
/// must not pass `max`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetGenerator {
    n_samples: usize,
    domain: Domain,
    mode: GenerationMode,
    stride: Option<f64>,
}

impl DatasetGenerator {
    pub fn new(n_samples: usize, domain: Domain) -> Self {
        Self {
            n_samples,
            domain,
            mode: GenerationMode::Even,
            stride: None,
        }
    }

    pub fn mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn stride(mut self, stride: f64) -> Self {
        self.stride = Some(stride);
        self
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn generation_mode(&self) -> GenerationMode {
        self.mode
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_samples < 1 {
            return Err(Error::InvalidDomain(
                "n_samples must be at least 1".to_string(),
            ));
        }
        self.domain.validate()?;

        if let Some(stride) = self.stride {
            if !(stride.is_finite() && stride > 0.0) {
                return Err(Error::InvalidDomain(format!(
                    "stride must be positive, got {}",
                    stride
                )));
            }
            let last = self.domain.min + stride * (self.n_samples - 1) as f64;
            if last > self.domain.max {
                return Err(Error::InvalidDomain(format!(
                    "{} samples with stride {} reach {}, past max {}",
                    self.n_samples, stride, last, self.domain.max
                )));
            }
        }

        if let GenerationMode::Noisy { amplitude } = self.mode {
            if !amplitude.is_finite() {
                return Err(Error::InvalidDomain(format!(
                    "noise amplitude must be finite, got {}",
                    amplitude
                )));
            }
        }
        Ok(())
    }

    /// Generates the dataset. `noise` is only drawn from in noisy mode.
    pub fn generate<N>(&self, model: &PriceModel, noise: &mut N) -> Result<Dataset>
    where
        N: NoiseSource + ?Sized,
    {
        self.validate()?;

        let areas = self.areas();
        let mut prices = model.predict_many(&areas);

        if let GenerationMode::Noisy { amplitude } = self.mode {
            let perturbations = noise.perturbations(self.n_samples, amplitude);
            for (price, delta) in prices.iter_mut().zip(perturbations.iter()) {
                *price += delta;
            }
        }

        let points = areas
            .iter()
            .zip(prices.iter())
            .map(|(&area, &price)| SamplePoint::new(area, price))
            .collect();

        log::debug!(
            "Generated {} samples over [{}, {}] ({:?})",
            self.n_samples,
            self.domain.min,
            self.domain.max,
            self.mode
        );

        Ok(Dataset { points })
    }

    fn areas(&self) -> Vector {
        let n = self.n_samples;
        let Domain { min, max } = self.domain;

        match self.stride {
            Some(stride) => Vector::from_shape_fn(n, |i| min + stride * i as f64),
            None if n == 1 => Vector::from_elem(1, min),
            None => {
                let step = (max - min) / (n - 1) as f64;
                // Pin the last point to `max` so rounding never leaves it short.
                Vector::from_shape_fn(n, |i| if i == n - 1 { max } else { min + step * i as f64 })
            }
        }
    }
}
