// =============================================================================
// Indicator Snapshot
// =============================================================================
//
// One pass over a price series producing every reading the scorer and the
// level calculator consume.  Fails as a whole if any indicator lacks data.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::indicators::bollinger::{calculate_bollinger, BollingerResult};
use crate::indicators::macd::{calculate_macd, MacdResult};
use crate::indicators::rsi::calculate_rsi;
use crate::indicators::stochastic::{calculate_stochastic, StochasticResult};
use crate::indicators::window::moving_average;
use crate::market_data::PriceSeries;
use crate::runtime_config::AnalyzerConfig;

/// A simple moving average reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAverage {
    pub period: usize,
    pub value: f64,
}

/// Every indicator reading for the latest bar of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub rsi: f64,
    pub macd: MacdResult,
    pub bollinger: BollingerResult,
    /// One entry per configured period, fastest first.
    pub moving_averages: Vec<MovingAverage>,
    pub stochastic: StochasticResult,
}

impl IndicatorSnapshot {
    /// Compute all indicators for `series` using the lookbacks in `config`.
    ///
    /// `config` is assumed to be validated.
    pub fn compute(series: &PriceSeries, config: &AnalyzerConfig) -> Result<Self, AnalysisError> {
        let closes = series.closes();

        let rsi = calculate_rsi(closes, config.rsi_period)?;
        let macd = calculate_macd(closes, config.macd)?;
        let bollinger =
            calculate_bollinger(closes, config.bollinger_period, config.bollinger_std_dev)?;
        let moving_averages = config
            .ma_periods
            .iter()
            .map(|&period| {
                moving_average(closes, period).map(|value| MovingAverage { period, value })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let stochastic = calculate_stochastic(
            series.highs(),
            series.lows(),
            closes,
            config.stochastic_period,
        )?;

        Ok(Self {
            rsi,
            macd,
            bollinger,
            moving_averages,
            stochastic,
        })
    }

    /// SMA value for `period`, if that period was computed.
    pub fn sma(&self, period: usize) -> Option<f64> {
        self.moving_averages
            .iter()
            .find(|ma| ma.period == period)
            .map(|ma| ma.value)
    }

    /// The longest-period SMA.
    pub fn slowest_ma(&self) -> Option<f64> {
        self.moving_averages
            .iter()
            .max_by_key(|ma| ma.period)
            .map(|ma| ma.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rising() -> PriceSeries {
        let closes: Vec<f64> = (100..160).map(|x| x as f64).collect();
        PriceSeries::from_closes(&closes).unwrap()
    }

    #[test]
    fn snapshot_of_rising_series() {
        let snap = IndicatorSnapshot::compute(&rising(), &AnalyzerConfig::default()).unwrap();
        assert!((snap.rsi - 100.0).abs() < 1e-10);
        assert!((snap.sma(5).unwrap() - 157.0).abs() < 1e-10);
        assert!((snap.sma(20).unwrap() - 149.5).abs() < 1e-10);
        assert!((snap.sma(60).unwrap() - 129.5).abs() < 1e-10);
        assert!((snap.slowest_ma().unwrap() - 129.5).abs() < 1e-10);
        assert!((snap.stochastic.k - 100.0).abs() < 1e-10);
        assert!(snap.macd.value > 0.0);
        assert!(snap.sma(10).is_none());
    }

    #[test]
    fn moving_averages_follow_config_order() {
        let cfg = AnalyzerConfig {
            ma_periods: vec![3, 10, 30],
            ..AnalyzerConfig::default()
        };
        let snap = IndicatorSnapshot::compute(&rising(), &cfg).unwrap();
        let periods: Vec<usize> = snap.moving_averages.iter().map(|m| m.period).collect();
        assert_eq!(periods, vec![3, 10, 30]);
    }

    #[test]
    fn short_series_fails_on_slowest_ma() {
        let closes: Vec<f64> = (100..130).map(|x| x as f64).collect();
        let series = PriceSeries::from_closes(&closes).unwrap();
        let err = IndicatorSnapshot::compute(&series, &AnalyzerConfig::default()).unwrap_err();
        assert_eq!(err, AnalysisError::insufficient("sma", 60, 30));
    }
}
