// =============================================================================
// Analyzer — price series in, scored recommendation out
// =============================================================================
//
// Pipeline:
//   1. Check the series covers the longest configured lookback
//   2. Compute the indicator snapshot
//   3. Derive support/resistance levels
//   4. Run the weighted rule scorer against the current price
//   5. Map the score to a recommendation
//
// Pure and synchronous: an `Analyzer` holds only its validated config, so one
// instance can be shared across threads and the same input always yields the
// same result.
// =============================================================================

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AnalysisError;
use crate::indicators::rsi::rsi_zone;
use crate::indicators::IndicatorSnapshot;
use crate::levels::{calculate_levels, LevelSet};
use crate::market_data::PriceSeries;
use crate::runtime_config::AnalyzerConfig;
use crate::signals::{Recommendation, ScoreResult, WeightedScorer};

/// Everything the presentation layer needs for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub indicators: IndicatorSnapshot,
    pub levels: LevelSet,
    pub score: ScoreResult,
    pub recommendation: Recommendation,
}

/// Reusable analysis entry point with a validated configuration.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    scorer: WeightedScorer,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self {
            config,
            scorer: WeightedScorer::default(),
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze `series`, scoring against its last close.
    pub fn analyze(&self, series: &PriceSeries) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_at(series, series.last_close())
    }

    /// Analyze `series`, scoring against a live quote `price` that may differ
    /// from the last close.
    pub fn analyze_at(
        &self,
        series: &PriceSeries,
        price: f64,
    ) -> Result<AnalysisResult, AnalysisError> {
        if !(price.is_finite() && price > 0.0) {
            return Err(AnalysisError::InvalidInput {
                index: series.len(),
                field: "price",
                value: price,
            });
        }

        let required = self.config.required_bars();
        if series.len() < required {
            return Err(AnalysisError::insufficient("analysis", required, series.len()));
        }

        let indicators = IndicatorSnapshot::compute(series, &self.config)?;
        let levels = calculate_levels(series, &indicators, self.config.level_lookback)?;
        let score = self.scorer.score(price, &indicators);
        let recommendation = Recommendation::from_score(score.score);

        debug!(
            bars = series.len(),
            price,
            rsi = indicators.rsi,
            rsi_zone = rsi_zone(indicators.rsi),
            macd_histogram = indicators.macd.histogram,
            score = score.score,
            recommendation = %recommendation,
            "analysis complete"
        );

        Ok(AnalysisResult {
            indicators,
            levels,
            score,
            recommendation,
        })
    }
}

/// One-shot analysis.  `options` overrides the default lookback periods.
pub fn analyze(
    series: &PriceSeries,
    options: Option<&AnalyzerConfig>,
) -> Result<AnalysisResult, AnalysisError> {
    let config = options.cloned().unwrap_or_default();
    Analyzer::new(config)?.analyze(series)
}
