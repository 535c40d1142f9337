pub use ndarray::Array1;

pub mod config;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod format;
pub mod linear_model;
pub mod metrics;
pub mod noise;

pub use config::{AreaBounds, Config};
pub use controller::{DisplayTuple, InteractionController, InteractionState, ListenerId};
pub use dataset::{Dataset, DatasetGenerator, Domain, GenerationMode, SamplePoint};
pub use error::{Error, Result};
pub use format::CurrencyFormat;
pub use linear_model::PriceModel;
pub use noise::{FixedNoise, NoNoise, NoiseSource, RngNoise};

pub type Vector = Array1<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_even_deployment() {
        let mut controller = InteractionController::new(Config::default(), &mut NoNoise).unwrap();

        let dataset = controller.dataset();
        assert_eq!(dataset.n_samples(), 11);
        assert_eq!(dataset.points()[0].price(), 365_503.0);

        controller.set_area(35.0);
        let display = controller.display(&CurrencyFormat::brl());
        assert_eq!(display.area, 50.0);
        assert_eq!(display.price_text, "R$ 365.503");
    }
}
