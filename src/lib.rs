// =============================================================================
// Market Pulse — Technical indicator scoring engine
// =============================================================================
//
// Daily price series in; indicators, support/resistance levels, a 0..=100
// composite score and a five-way recommendation out.  The engine is pure:
// data acquisition and rendering live with the caller.
// =============================================================================

pub mod analyzer;
pub mod error;
pub mod indicators;
pub mod levels;
pub mod market_data;
pub mod report;
pub mod runtime_config;
pub mod signals;
pub mod types;

pub use analyzer::{analyze, AnalysisResult, Analyzer};
pub use error::AnalysisError;
pub use indicators::IndicatorSnapshot;
pub use levels::LevelSet;
pub use market_data::{Bar, Instrument, Market, PriceSeries};
pub use runtime_config::AnalyzerConfig;
pub use signals::{Recommendation, ScoreResult, SignalContribution};
pub use types::{SignalDirection, Tone};
