// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ), where σ is the *population* standard deviation
// of the trailing window. The Band Width (BBW) is the normalised distance:
// BBW = (upper - lower) / middle * 100.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::indicators::window::{moving_average, trailing, variance_of};

/// Result of a Bollinger Band calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerResult {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub width: f64,
}

/// Calculate Bollinger Bands for the given closing prices.
///
/// - `upper`  = SMA + `num_std` * σ
/// - `middle` = SMA
/// - `lower`  = SMA - `num_std` * σ
/// - `width`  = (upper - lower) / middle * 100, or 0 when `middle` is zero
///
/// # Errors
/// `InsufficientData` when there are fewer than `period` closes.
pub fn calculate_bollinger(
    closes: &[f64],
    period: usize,
    num_std: f64,
) -> Result<BollingerResult, AnalysisError> {
    let window = trailing(closes, period, "bollinger")?;
    let middle = moving_average(window, period)?;
    let std_dev = variance_of(window, middle).sqrt();

    let upper = middle + num_std * std_dev;
    let lower = middle - num_std * std_dev;
    let width = if middle == 0.0 {
        0.0
    } else {
        (upper - lower) / middle * 100.0
    };

    Ok(BollingerResult {
        upper,
        middle,
        lower,
        width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bollinger_basic() {
        let closes: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let bb = calculate_bollinger(&closes, 20, 2.0).unwrap();
        assert!(bb.upper > bb.middle);
        assert!(bb.lower < bb.middle);
        assert!(bb.width > 0.0);
        assert!((bb.middle - 10.5).abs() < 1e-10);
    }

    #[test]
    fn bollinger_uses_population_std_dev() {
        // Trailing 20 of 100..=159 is 140..=159: σ² = (20² - 1) / 12.
        let closes: Vec<f64> = (100..=159).map(|x| x as f64).collect();
        let bb = calculate_bollinger(&closes, 20, 2.0).unwrap();
        let sigma = (399.0_f64 / 12.0).sqrt();
        assert!((bb.middle - 149.5).abs() < 1e-10);
        assert!((bb.upper - (149.5 + 2.0 * sigma)).abs() < 1e-10);
        assert!((bb.lower - (149.5 - 2.0 * sigma)).abs() < 1e-10);
    }

    #[test]
    fn bollinger_insufficient_data() {
        let closes = vec![1.0, 2.0, 3.0];
        assert_eq!(
            calculate_bollinger(&closes, 20, 2.0),
            Err(AnalysisError::insufficient("bollinger", 20, 3))
        );
    }

    #[test]
    fn bollinger_flat() {
        let bb = calculate_bollinger(&[100.0; 20], 20, 2.0).unwrap();
        assert!((bb.width - 0.0).abs() < 1e-10);
        assert_eq!(bb.lower, bb.middle);
        assert_eq!(bb.upper, bb.middle);
    }

    #[test]
    fn bands_are_ordered() {
        let closes = [3.0, 9.0, 1.0, 7.0, 5.0, 2.0, 8.0, 6.0, 4.0, 10.0];
        let bb = calculate_bollinger(&closes, 10, 2.0).unwrap();
        assert!(bb.lower <= bb.middle && bb.middle <= bb.upper);
    }
}
