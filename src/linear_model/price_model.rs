use crate::Vector;
use crate::dataset::{Dataset, Domain, SamplePoint};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `price = slope * area + intercept`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceModel {
    slope: f64,
    intercept: f64,
}

impl PriceModel {
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// No clamping or validation: callers bound the area themselves.
    pub fn predict(&self, area: f64) -> f64 {
        self.slope * area + self.intercept
    }

    pub fn predict_many(&self, areas: &Vector) -> Vector {
        areas * self.slope + self.intercept
    }

    /// Endpoints of the model line across `domain`.
    pub fn reference_line(&self, domain: Domain) -> [SamplePoint; 2] {
        [
            SamplePoint::new(domain.min, self.predict(domain.min)),
            SamplePoint::new(domain.max, self.predict(domain.max)),
        ]
    }

    /// R² of the fixed line against `dataset`.
    pub fn score(&self, dataset: &Dataset) -> Result<f64> {
        let y_pred = self.predict_many(&dataset.areas());
        crate::metrics::r2_score(&dataset.prices(), &y_pred)
    }
}

impl fmt::Display for PriceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "price = {} × area + {}", self.slope, self.intercept)
    }
}
