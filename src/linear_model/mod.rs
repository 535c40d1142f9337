//! Fixed-coefficient linear price model.
//!
//! The coefficients are constants chosen up front; nothing in this module
//! estimates them from data. `score` only evaluates how well the fixed line
//! explains a dataset.
//!
//! # Examples
//!
//! ```rust
//! use area_price::{Domain, PriceModel};
//!
//! let model = PriceModel::new(6834.0, 23803.0);
//! assert_eq!(model.predict(100.0), 707_203.0);
//!
//! let [start, end] = model.reference_line(Domain::new(50.0, 200.0));
//! assert_eq!(start.area(), 50.0);
//! assert_eq!(end.price(), model.predict(200.0));
//! ```

mod price_model;

pub use price_model::PriceModel;
