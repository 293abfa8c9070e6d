// =============================================================================
// Analyzer Configuration — Lookback periods with atomic save
// =============================================================================
//
// Every lookback the indicator engine uses lives here.  All fields carry a
// serde default so a partial (or empty) JSON file loads cleanly and adding a
// field never breaks an older config file.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AnalysisError;
use crate::indicators::macd::MacdPeriods;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_rsi_period() -> usize {
    14
}

fn default_stochastic_period() -> usize {
    9
}

fn default_bollinger_period() -> usize {
    20
}

fn default_bollinger_std_dev() -> f64 {
    2.0
}

fn default_ma_periods() -> Vec<usize> {
    vec![5, 20, 60]
}

fn default_level_lookback() -> usize {
    20
}

// =============================================================================
// AnalyzerConfig
// =============================================================================

/// Lookback periods for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Number of trailing deltas in the RSI window.
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    /// High/low window for the stochastic oscillator.
    #[serde(default = "default_stochastic_period")]
    pub stochastic_period: usize,

    /// SMA window of the Bollinger middle band.
    #[serde(default = "default_bollinger_period")]
    pub bollinger_period: usize,

    /// Band half-width in standard deviations.
    #[serde(default = "default_bollinger_std_dev")]
    pub bollinger_std_dev: f64,

    /// Simple moving averages, fastest first.  The trend-alignment rule
    /// compares them in this order and the slowest one is a support level.
    #[serde(default = "default_ma_periods")]
    pub ma_periods: Vec<usize>,

    /// Fast/slow EMA and signal-line periods.
    #[serde(default)]
    pub macd: MacdPeriods,

    /// Window for the recent high/low used as support and resistance.
    #[serde(default = "default_level_lookback")]
    pub level_lookback: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            rsi_period: default_rsi_period(),
            stochastic_period: default_stochastic_period(),
            bollinger_period: default_bollinger_period(),
            bollinger_std_dev: default_bollinger_std_dev(),
            ma_periods: default_ma_periods(),
            macd: MacdPeriods::default(),
            level_lookback: default_level_lookback(),
        }
    }
}

impl AnalyzerConfig {
    /// Reject configurations that cannot produce a meaningful analysis.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let periods = [
            ("rsi_period", self.rsi_period),
            ("stochastic_period", self.stochastic_period),
            ("bollinger_period", self.bollinger_period),
            ("level_lookback", self.level_lookback),
            ("macd.fast", self.macd.fast),
            ("macd.slow", self.macd.slow),
            ("macd.signal", self.macd.signal),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, p)| *p == 0) {
            return Err(AnalysisError::InvalidConfig(format!("{name} must be positive")));
        }

        if self.macd.fast >= self.macd.slow {
            return Err(AnalysisError::InvalidConfig(format!(
                "macd.fast ({}) must be shorter than macd.slow ({})",
                self.macd.fast, self.macd.slow
            )));
        }

        if !(self.bollinger_std_dev.is_finite() && self.bollinger_std_dev > 0.0) {
            return Err(AnalysisError::InvalidConfig(format!(
                "bollinger_std_dev must be positive, got {}",
                self.bollinger_std_dev
            )));
        }

        if self.ma_periods.is_empty() {
            return Err(AnalysisError::InvalidConfig(
                "ma_periods must not be empty".to_string(),
            ));
        }
        if self.ma_periods[0] == 0 || self.ma_periods.windows(2).any(|w| w[0] >= w[1]) {
            return Err(AnalysisError::InvalidConfig(format!(
                "ma_periods must be positive and strictly increasing, got {:?}",
                self.ma_periods
            )));
        }

        Ok(())
    }

    /// Number of bars a full analysis needs: the longest lookback of any
    /// indicator (60 with the defaults).
    pub fn required_bars(&self) -> usize {
        let slowest_ma = self.ma_periods.iter().copied().max().unwrap_or(0);
        [
            self.rsi_period + 1,
            self.stochastic_period,
            self.bollinger_period,
            self.level_lookback,
            self.macd.signal,
            slowest_ma,
        ]
        .into_iter()
        .max()
        .unwrap_or(1)
    }

    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read analyzer config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse analyzer config from {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("rejected analyzer config from {}", path.display()))?;

        info!(
            path = %path.display(),
            ma_periods = ?config.ma_periods,
            required_bars = config.required_bars(),
            "analyzer config loaded"
        );

        Ok(config)
    }

    /// Persist the configuration to `path` using an atomic write (write to
    /// `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise analyzer config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "analyzer config saved (atomic)");
        Ok(())
    }
}
