// =============================================================================
// Trailing-Window Statistics
// =============================================================================
//
// Building blocks shared by every indicator: the simple moving average, the
// trailing high/low, and the population variance of a window.
//
// All functions look at the *most recent* `period` values of the slice (the
// slice is ordered oldest-to-newest).
// =============================================================================

use crate::error::AnalysisError;

/// Marker for a zero-width range (flat RSI window, flat stochastic range).
///
/// Never leaves the crate: every caller substitutes the documented neutral
/// value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DegenerateRange;

/// Borrow the trailing `period` values of `series`.
pub(crate) fn trailing<'a>(
    series: &'a [f64],
    period: usize,
    indicator: &'static str,
) -> Result<&'a [f64], AnalysisError> {
    if period == 0 || series.len() < period {
        return Err(AnalysisError::insufficient(indicator, period.max(1), series.len()));
    }
    Ok(&series[series.len() - period..])
}

/// Arithmetic mean of the trailing `period` values.
///
/// # Errors
/// `InsufficientData` when `series.len() < period` or `period == 0`.
pub fn moving_average(series: &[f64], period: usize) -> Result<f64, AnalysisError> {
    let window = trailing(series, period, "sma")?;
    Ok(window.iter().sum::<f64>() / period as f64)
}

/// `(max, min)` over the trailing `period` values.
pub fn trailing_extremes(series: &[f64], period: usize) -> Result<(f64, f64), AnalysisError> {
    let window = trailing(series, period, "trailing_extremes")?;
    let extremes = window
        .iter()
        .fold((f64::NEG_INFINITY, f64::INFINITY), |(hi, lo), &v| {
            (hi.max(v), lo.min(v))
        });
    Ok(extremes)
}

/// Population variance of `window` around `mean` (divides by the window
/// length, not length - 1).  An empty window has zero variance.
pub fn variance_of(window: &[f64], mean: f64) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / window.len() as f64
}

/// `numerator / denominator * 100`, or `DegenerateRange` when the denominator
/// is zero.
pub(crate) fn percent_of_range(numerator: f64, denominator: f64) -> Result<f64, DegenerateRange> {
    if denominator == 0.0 {
        return Err(DegenerateRange);
    }
    Ok(numerator / denominator * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_uses_trailing_window() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((moving_average(&series, 2).unwrap() - 4.5).abs() < 1e-10);
        assert!((moving_average(&series, 5).unwrap() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn sma_insufficient_data() {
        let err = moving_average(&[1.0, 2.0], 3).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InsufficientData {
                indicator: "sma",
                required: 3,
                available: 2
            }
        );
    }

    #[test]
    fn sma_period_zero_is_rejected() {
        assert!(moving_average(&[1.0, 2.0], 0).is_err());
    }

    #[test]
    fn extremes_of_trailing_window() {
        let series = [50.0, 1.0, 7.0, 3.0, 9.0, 4.0];
        let (hi, lo) = trailing_extremes(&series, 4).unwrap();
        assert!((hi - 9.0).abs() < 1e-10);
        assert!((lo - 3.0).abs() < 1e-10);
    }

    #[test]
    fn population_variance() {
        // mean 5, squared deviations 9+1+1+1+0+0+4+16 = 32, / 8 = 4
        let window = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((variance_of(&window, 5.0) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn variance_of_flat_window_is_zero() {
        assert_eq!(variance_of(&[3.0; 10], 3.0), 0.0);
        assert_eq!(variance_of(&[], 0.0), 0.0);
    }

    #[test]
    fn percent_of_zero_range_is_degenerate() {
        assert_eq!(percent_of_range(1.0, 0.0), Err(DegenerateRange));
        assert!((percent_of_range(1.0, 4.0).unwrap() - 25.0).abs() < 1e-10);
    }
}
