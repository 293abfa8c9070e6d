// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_t      = close_t * multiplier + EMA_{t-1} * (1 - multiplier)
//
// The EMA is seeded with the very first close and then folded over the *whole*
// series, so it depends on the full history rather than a trailing window.
// A series shorter than `period` still yields a value.
// =============================================================================

use crate::error::AnalysisError;

/// Return the final EMA value of `closes` for the given `period`.
///
/// # Errors
/// - `closes` is empty => `InsufficientData`
/// - `period == 0` => `InsufficientData` (no defined multiplier)
pub fn exponential_moving_average(closes: &[f64], period: usize) -> Result<f64, AnalysisError> {
    let (&seed, rest) = closes
        .split_first()
        .ok_or_else(|| AnalysisError::insufficient("ema", 1, 0))?;
    if period == 0 {
        return Err(AnalysisError::insufficient("ema", 1, closes.len()));
    }

    let multiplier = 2.0 / (period + 1) as f64;
    let ema = rest
        .iter()
        .fold(seed, |prev, &close| close * multiplier + prev * (1.0 - multiplier));

    Ok(ema)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ema_empty_input() {
        assert_eq!(
            exponential_moving_average(&[], 5),
            Err(AnalysisError::insufficient("ema", 1, 0))
        );
    }

    #[test]
    fn ema_period_zero() {
        assert!(exponential_moving_average(&[1.0, 2.0, 3.0], 0).is_err());
    }

    #[test]
    fn ema_single_value_is_the_seed() {
        let ema = exponential_moving_average(&[42.0], 12).unwrap();
        assert!((ema - 42.0).abs() < 1e-10);
    }

    #[test]
    fn ema_known_values() {
        // 5-period EMA of [1..=10], seeded with 1.0, multiplier = 1/3.
        let closes: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let mult = 2.0 / 6.0;
        let mut expected = 1.0;
        for &c in &closes[1..] {
            expected = c * mult + expected * (1.0 - mult);
        }
        let ema = exponential_moving_average(&closes, 5).unwrap();
        assert!((ema - expected).abs() < 1e-10, "got {ema}, expected {expected}");
    }

    #[test]
    fn ema_shorter_than_period_still_defined() {
        // Only the seed and one update; no window requirement.
        let ema = exponential_moving_average(&[10.0, 20.0], 26).unwrap();
        let k = 2.0 / 27.0;
        assert!((ema - (20.0 * k + 10.0 * (1.0 - k))).abs() < 1e-10);
    }

    #[test]
    fn ema_flat_series() {
        let ema = exponential_moving_average(&[100.0; 60], 12).unwrap();
        assert!((ema - 100.0).abs() < 1e-10);
    }

    #[test]
    fn ema_depends_on_full_history() {
        // Same trailing values, different prefix => different EMA.
        let a = [10.0, 50.0, 50.0, 50.0];
        let b = [90.0, 50.0, 50.0, 50.0];
        let ea = exponential_moving_average(&a, 3).unwrap();
        let eb = exponential_moving_average(&b, 3).unwrap();
        assert!(ea < eb);
    }
}
