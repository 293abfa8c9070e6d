// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
//   value     = EMA(closes, fast) - EMA(closes, slow)
//   signal    = EMA(last `signal` closes ++ [value], signal)
//   histogram = value - signal
//
// The signal line is a simplification: instead of smoothing a history of MACD
// values it smooths the last few *closes* with the current MACD value appended
// as a final point.  Because that sequence is dominated by price levels, the
// histogram is negative for almost every positive-price series.  Reproduced
// as-is to keep scores comparable with the dashboard's historical output.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::indicators::ema::exponential_moving_average;
use crate::indicators::window::trailing;

/// Lookback periods for MACD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdPeriods {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdPeriods {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

/// Result of a MACD calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdResult {
    pub value: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Calculate MACD for `closes`.
///
/// # Errors
/// `InsufficientData` when `closes` holds fewer than `periods.signal` values
/// (the signal line needs that many trailing closes) or is empty.
pub fn calculate_macd(closes: &[f64], periods: MacdPeriods) -> Result<MacdResult, AnalysisError> {
    let tail = trailing(closes, periods.signal, "macd")?;

    let fast = exponential_moving_average(closes, periods.fast)?;
    let slow = exponential_moving_average(closes, periods.slow)?;
    let value = fast - slow;

    let mut signal_input = Vec::with_capacity(tail.len() + 1);
    signal_input.extend_from_slice(tail);
    signal_input.push(value);
    let signal = exponential_moving_average(&signal_input, periods.signal)?;

    Ok(MacdResult {
        value,
        signal,
        histogram: value - signal,
    })
}
