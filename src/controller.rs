//! Reactive state for the area input.
//!
//! [`InteractionController`] owns the current area and keeps the predicted
//! price in step with it. Listeners registered with
//! [`subscribe`](InteractionController::subscribe) are called synchronously,
//! in registration order, before `set_area` returns.
//!
//! # Examples
//!
//! ```rust
//! use area_price::{Config, CurrencyFormat, InteractionController, NoNoise};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut controller = InteractionController::new(Config::default(), &mut NoNoise).unwrap();
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! controller.subscribe(move |state, _dataset| sink.borrow_mut().push(state.area()));
//!
//! controller.set_area(150.0);
//! controller.set_area(500.0); // clamped to the control's max
//!
//! assert_eq!(*seen.borrow(), vec![150.0, 200.0]);
//! assert_eq!(controller.display(&CurrencyFormat::brl()).price_text, "R$ 1.390.603");
//! ```

use crate::config::{AreaBounds, Config};
use crate::dataset::{Dataset, DatasetGenerator, SamplePoint};
use crate::error::Result;
use crate::format::CurrencyFormat;
use crate::linear_model::PriceModel;
use crate::noise::NoiseSource;
use serde::Serialize;

/// Current area and the price derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct InteractionState {
    area: f64,
    predicted_price: f64,
}

impl InteractionState {
    fn derive(model: &PriceModel, area: f64) -> Self {
        Self {
            area,
            predicted_price: model.predict(area),
        }
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn predicted_price(&self) -> f64 {
        self.predicted_price
    }
}

/// What a presentation layer shows next to the input control.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayTuple {
    pub area: f64,
    pub predicted_price: f64,
    pub price_text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&InteractionState, &Dataset)>;

pub struct InteractionController {
    model: PriceModel,
    bounds: AreaBounds,
    generator: DatasetGenerator,
    dataset: Dataset,
    state: InteractionState,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl InteractionController {
    /// Validates `config`, generates the dataset and computes the initial
    /// prediction for the configured default area.
    pub fn new<N>(config: Config, noise: &mut N) -> Result<Self>
    where
        N: NoiseSource + ?Sized,
    {
        config.validate()?;
        let Config {
            model,
            bounds,
            dataset: generator,
        } = config;

        let dataset = generator.generate(&model, noise)?;
        let state = InteractionState::derive(&model, bounds.constrain(bounds.default));

        Ok(Self {
            model,
            bounds,
            generator,
            dataset,
            state,
            listeners: Vec::new(),
            next_listener: 0,
        })
    }

    /// Moves the input to `area`, clamped into the control's range, and
    /// notifies every listener. A NaN leaves the area where it was.
    pub fn set_area(&mut self, area: f64) -> InteractionState {
        let area = if area.is_nan() {
            self.state.area
        } else {
            self.bounds.constrain(area)
        };
        self.state = InteractionState::derive(&self.model, area);
        self.publish();
        self.state
    }

    pub fn nudge(&mut self, delta: f64) -> InteractionState {
        self.set_area(self.state.area + delta)
    }

    /// Regenerates the dataset from the configured generator.
    pub fn reset_dataset<N>(&mut self, noise: &mut N) -> Result<()>
    where
        N: NoiseSource + ?Sized,
    {
        self.dataset = self.generator.generate(&self.model, noise)?;
        log::debug!("Dataset reset ({} samples)", self.dataset.n_samples());
        self.publish();
        Ok(())
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&InteractionState, &Dataset) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn area(&self) -> f64 {
        self.state.area
    }

    pub fn predicted_price(&self) -> f64 {
        self.state.predicted_price
    }

    pub fn model(&self) -> &PriceModel {
        &self.model
    }

    pub fn bounds(&self) -> &AreaBounds {
        &self.bounds
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn reference_line(&self) -> [SamplePoint; 2] {
        self.model.reference_line(self.generator.domain())
    }

    pub fn display(&self, format: &CurrencyFormat) -> DisplayTuple {
        DisplayTuple {
            area: self.state.area,
            predicted_price: self.state.predicted_price,
            price_text: format.format(self.state.predicted_price),
        }
    }

    fn publish(&mut self) {
        log::trace!(
            "Publishing area={} price={} to {} listener(s)",
            self.state.area,
            self.state.predicted_price,
            self.listeners.len()
        );
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state, &self.dataset);
        }
    }
}

impl std::fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionController")
            .field("model", &self.model)
            .field("bounds", &self.bounds)
            .field("state", &self.state)
            .field("n_samples", &self.dataset.n_samples())
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}
