// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators behind the score.
// Every public function returns `Result<_, AnalysisError>` so callers are
// forced to handle insufficient data; zero-width ranges are resolved to
// documented neutral values inside each indicator.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod snapshot;
pub mod stochastic;
pub mod window;

pub use bollinger::BollingerResult;
pub use macd::{MacdPeriods, MacdResult};
pub use snapshot::{IndicatorSnapshot, MovingAverage};
pub use stochastic::StochasticResult;
