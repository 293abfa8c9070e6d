// =============================================================================
// Relative Strength Index (RSI) — Simple Average Variant
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Take the last `period` deltas (close_i - close_{i-1}).
// Step 2 — Sum positive deltas as gains, absolute negative deltas as losses.
// Step 3 — avg_gain = gains / period,  avg_loss = losses / period
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// No Wilder smoothing: only the trailing window is considered.
//
// Thresholds:  RSI > 70 => OVERBOUGHT,  RSI < 30 => OVERSOLD.
// =============================================================================

use crate::error::AnalysisError;
use crate::indicators::window::DegenerateRange;

/// Compute RSI over the trailing `period` deltas of `closes`.
///
/// # Edge cases
/// - `period == 0` or `closes.len() < period + 1` => `InsufficientData`
/// - No movement at all in the window => 50.0
/// - Gains but no losses => 100.0
pub fn calculate_rsi(closes: &[f64], period: usize) -> Result<f64, AnalysisError> {
    if period == 0 || closes.len() < period + 1 {
        return Err(AnalysisError::insufficient("rsi", period + 1, closes.len()));
    }

    let window = &closes[closes.len() - period - 1..];
    let (gains, losses) = window.windows(2).fold((0.0_f64, 0.0_f64), |(g, l), w| {
        let delta = w[1] - w[0];
        if delta > 0.0 {
            (g + delta, l)
        } else {
            (g, l - delta)
        }
    });

    let period_f = period as f64;
    Ok(rsi_from_averages(gains / period_f, losses / period_f).unwrap_or(50.0))
}

/// Human-readable zone for an RSI reading.
pub fn rsi_zone(rsi: f64) -> &'static str {
    if rsi > 70.0 {
        "OVERBOUGHT"
    } else if rsi < 30.0 {
        "OVERSOLD"
    } else {
        "NEUTRAL"
    }
}

// =============================================================================
// Internal helpers
// =============================================================================

/// Convert average gain / average loss into an RSI value in [0, 100].
///
/// A window with neither gains nor losses is a degenerate range.
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Result<f64, DegenerateRange> {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        return Err(DegenerateRange);
    }
    if avg_loss == 0.0 {
        return Ok(100.0);
    }
    let rs = avg_gain / avg_loss;
    Ok(100.0 - 100.0 / (1.0 + rs))
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_empty_input() {
        assert!(calculate_rsi(&[], 14).is_err());
    }

    #[test]
    fn rsi_period_zero() {
        assert!(calculate_rsi(&[1.0, 2.0, 3.0], 0).is_err());
    }

    #[test]
    fn rsi_insufficient_data() {
        // Need period+1 closes (period deltas). 14 closes => 13 deltas < 14.
        let closes: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        assert_eq!(
            calculate_rsi(&closes, 14),
            Err(AnalysisError::insufficient("rsi", 15, 14))
        );
    }

    #[test]
    fn rsi_exactly_enough_data() {
        let closes: Vec<f64> = (1..=15).map(|x| x as f64).collect();
        assert!(calculate_rsi(&closes, 14).is_ok());
    }

    #[test]
    fn rsi_all_gains() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let rsi = calculate_rsi(&closes, 14).unwrap();
        assert!((rsi - 100.0).abs() < 1e-10, "expected 100.0, got {rsi}");
    }

    #[test]
    fn rsi_all_losses() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let rsi = calculate_rsi(&closes, 14).unwrap();
        assert!(rsi.abs() < 1e-10, "expected 0.0, got {rsi}");
    }

    #[test]
    fn rsi_flat_market() {
        let rsi = calculate_rsi(&[100.0; 30], 14).unwrap();
        assert!((rsi - 50.0).abs() < 1e-10, "expected 50.0, got {rsi}");
    }

    #[test]
    fn rsi_alternating_moves_are_neutral() {
        // +1 / -1 alternating: seven gains and seven losses of equal size.
        let closes: Vec<f64> = (0..30).map(|i| if i % 2 == 0 { 100.0 } else { 101.0 }).collect();
        let rsi = calculate_rsi(&closes, 14).unwrap();
        assert!((rsi - 50.0).abs() < 1e-10, "expected 50.0, got {rsi}");
    }

    #[test]
    fn rsi_ignores_moves_before_window() {
        // A crash far back in history must not affect the trailing reading.
        let mut closes = vec![500.0, 100.0];
        closes.extend((1..=14).map(|x| 100.0 + x as f64));
        let rsi = calculate_rsi(&closes, 14).unwrap();
        assert!((rsi - 100.0).abs() < 1e-10);
    }

    #[test]
    fn rsi_known_value() {
        // Last 3 deltas: +2, -1, +1 => gains 3, losses 1 => RS 3 => RSI 75.
        let rsi = calculate_rsi(&[10.0, 12.0, 11.0, 12.0], 3).unwrap();
        assert!((rsi - 75.0).abs() < 1e-10);
    }

    #[test]
    fn rsi_range_check() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
        ];
        let rsi = calculate_rsi(&closes, 14).unwrap();
        assert!((0.0..=100.0).contains(&rsi), "RSI {rsi} out of range");
    }

    #[test]
    fn zone_labels() {
        assert_eq!(rsi_zone(100.0), "OVERBOUGHT");
        assert_eq!(rsi_zone(10.0), "OVERSOLD");
        assert_eq!(rsi_zone(70.0), "NEUTRAL");
        assert_eq!(rsi_zone(30.0), "NEUTRAL");
    }
}
