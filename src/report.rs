// =============================================================================
// Analysis Report — What the CLI hands to the presentation layer
// =============================================================================
//
// Wraps a deterministic `AnalysisResult` with the per-run context that is *not*
// deterministic (id, timestamp) plus quote details a display needs.  Keeping
// these out of `AnalysisResult` means re-running an analysis on the same input
// still yields an identical result.
// =============================================================================

use serde::Serialize;

use crate::analyzer::AnalysisResult;
use crate::market_data::{FetchedSeries, Instrument};

/// One analysed instrument, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Unique identifier for this report (UUID v4).
    pub id: String,

    pub instrument: Instrument,

    /// Quote currency, e.g. "TWD" or "USD".
    pub currency: String,

    /// Price the score was computed against.
    pub last_price: f64,

    /// Last close versus previous close, in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_pct: Option<f64>,

    /// ISO 8601 timestamp of when this report was created.
    pub generated_at: String,

    pub result: AnalysisResult,
}

impl AnalysisReport {
    pub fn new(instrument: Instrument, fetched: &FetchedSeries, result: AnalysisResult) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            instrument,
            currency: fetched.currency.clone(),
            last_price: fetched.series.last_close(),
            change_pct: fetched.series.change_pct(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            result,
        }
    }

    /// One-line summary, e.g. `2330 (TW): 71/100 strong buy @ 119.00 TWD (-2.46%)`.
    pub fn summary(&self) -> String {
        let change = self
            .change_pct
            .map(|c| format!(" ({c:+.2}%)"))
            .unwrap_or_default();
        format!(
            "{}: {}/100 {} @ {:.2} {}{}",
            self.instrument,
            self.result.score.score,
            self.result.recommendation,
            self.last_price,
            self.currency,
            change
        )
    }
}
