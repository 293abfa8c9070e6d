// =============================================================================
// Support / Resistance Levels
// =============================================================================
//
// Support candidates:    recent low close, Bollinger lower band, slowest SMA
// Resistance candidates: recent high close, Bollinger upper band
//
// Support is listed highest first, resistance lowest first, so index 0 of each
// is the level nearest a price sitting between them.  Support is *not*
// guaranteed to sit below resistance (the slowest SMA can be anywhere).
//
// Targets:
//   target_buy  = (recent low  + lower band) / 2
//   target_sell = (recent high + upper band) / 2
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::indicators::window::trailing_extremes;
use crate::indicators::IndicatorSnapshot;
use crate::market_data::PriceSeries;

/// Price levels derived from a series and its indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    /// Descending.
    pub support: Vec<f64>,
    /// Ascending.
    pub resistance: Vec<f64>,
    pub target_buy: f64,
    pub target_sell: f64,
}

/// Compute support/resistance and target prices.
///
/// `lookback` is the window for the recent high/low close.
///
/// # Errors
/// `InsufficientData` when the series is shorter than `lookback`.
pub fn calculate_levels(
    series: &PriceSeries,
    snapshot: &IndicatorSnapshot,
    lookback: usize,
) -> Result<LevelSet, AnalysisError> {
    let (recent_high, recent_low) = trailing_extremes(series.closes(), lookback)?;
    let bands = &snapshot.bollinger;

    let mut support = vec![recent_low, bands.lower];
    support.extend(snapshot.slowest_ma());
    support.sort_by(|a, b| b.total_cmp(a));

    let mut resistance = vec![recent_high, bands.upper];
    resistance.sort_by(|a, b| a.total_cmp(b));

    Ok(LevelSet {
        support,
        resistance,
        target_buy: (recent_low + bands.lower) / 2.0,
        target_sell: (recent_high + bands.upper) / 2.0,
    })
}
