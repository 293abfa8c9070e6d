pub mod instrument;
pub mod series;
pub mod source;

// Re-export the core data types for convenient access (e.g. `use crate::market_data::PriceSeries`).
pub use instrument::{Instrument, Market};
pub use series::{Bar, PriceSeries};
pub use source::{FetchedSeries, JsonFileSource, PriceSource};
