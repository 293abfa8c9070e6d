// =============================================================================
// Stochastic Oscillator (K/D)
// =============================================================================
//
// RSV compares the last close with the high/low range of the trailing window:
//   RSV = (close - lowest_low) / (highest_high - lowest_low) * 100
//
// K is the raw RSV.  D is the simple average of the single-element sequence
// [RSV], so D == K.  This is a simplification of the usual three-period
// smoothing of historical K values.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::indicators::window::{moving_average, percent_of_range, trailing};

/// Stochastic oscillator reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticResult {
    pub k: f64,
    pub d: f64,
}

/// Calculate the stochastic oscillator.
///
/// `highs`, `lows` and `closes` are ordered oldest-to-newest and are expected to
/// be the same length; each is checked against `period` independently.
///
/// # Edge cases
/// - Any input shorter than `period` => `InsufficientData`
/// - Flat range (highest == lowest) => K = D = 50
pub fn calculate_stochastic(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    period: usize,
) -> Result<StochasticResult, AnalysisError> {
    let highs = trailing(highs, period, "stochastic")?;
    let lows = trailing(lows, period, "stochastic")?;
    let close = *trailing(closes, period, "stochastic")?
        .last()
        .ok_or_else(|| AnalysisError::insufficient("stochastic", period, 0))?;

    let highest = highs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lowest = lows.iter().copied().fold(f64::INFINITY, f64::min);

    let rsv = percent_of_range(close - lowest, highest - lowest).unwrap_or(50.0);
    // Period 1 over [rsv]: D == K. Dividing by 3 here would cap D at 33.3.
    let d = moving_average(&[rsv], 1)?;

    Ok(StochasticResult { k: rsv, d })
}
