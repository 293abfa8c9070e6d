// =============================================================================
// Price Series — Validated daily bars, oldest to newest
// =============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// A single daily bar.  Only `close` is mandatory; crypto feeds in particular
/// carry one price per day and no volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl Bar {
    /// A bar that carries nothing but a closing price.
    pub fn from_close(close: f64) -> Self {
        Self {
            date: None,
            open: None,
            high: None,
            low: None,
            close,
            volume: None,
        }
    }
}

// ---------------------------------------------------------------------------
// PriceSeries -- validated, immutable, oldest-to-newest
// ---------------------------------------------------------------------------

/// Validated daily price history for one instrument.
///
/// Construction rejects empty input, non-finite or non-positive prices,
/// highs/lows that do not bracket the close, negative volume and bars dated
/// before their predecessor.  Once built the
/// series cannot be mutated; the close/high/low columns are extracted up front
/// so indicators can work on plain slices.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    bars: Vec<Bar>,
    closes: Vec<f64>,
    highs: Vec<f64>,
    lows: Vec<f64>,
}

impl PriceSeries {
    /// Validate `bars` and build a series.
    pub fn new(bars: Vec<Bar>) -> Result<Self, AnalysisError> {
        if bars.is_empty() {
            return Err(AnalysisError::insufficient("series", 1, 0));
        }

        for (index, bar) in bars.iter().enumerate() {
            check_price(index, "close", bar.close)?;
            for (field, value) in [("open", bar.open), ("high", bar.high), ("low", bar.low)] {
                if let Some(value) = value {
                    check_price(index, field, value)?;
                }
            }
            check_range(index, bar)?;
            if let Some(volume) = bar.volume {
                if !volume.is_finite() || volume < 0.0 {
                    return Err(AnalysisError::InvalidInput {
                        index,
                        field: "volume",
                        value: volume,
                    });
                }
            }
        }

        for (index, pair) in bars.windows(2).enumerate() {
            if let (Some(prev), Some(next)) = (pair[0].date, pair[1].date) {
                if next < prev {
                    return Err(AnalysisError::OutOfOrder { index: index + 1 });
                }
            }
        }

        let closes = bars.iter().map(|b| b.close).collect();
        let highs = bars.iter().map(|b| b.high.unwrap_or(b.close)).collect();
        let lows = bars.iter().map(|b| b.low.unwrap_or(b.close)).collect();

        Ok(Self {
            bars,
            closes,
            highs,
            lows,
        })
    }

    /// Build a close-only series.
    pub fn from_closes(closes: &[f64]) -> Result<Self, AnalysisError> {
        Self::new(closes.iter().copied().map(Bar::from_close).collect())
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Highs, with the close standing in for bars that carry no high.
    pub fn highs(&self) -> &[f64] {
        &self.highs
    }

    /// Lows, with the close standing in for bars that carry no low.
    pub fn lows(&self) -> &[f64] {
        &self.lows
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always `false`; an empty series cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last_close(&self) -> f64 {
        self.closes[self.closes.len() - 1]
    }

    /// Percent change of the last close versus the previous close.
    ///
    /// Returns `None` for a single-bar series.
    pub fn change_pct(&self) -> Option<f64> {
        let [.., prev, last] = self.closes.as_slice() else {
            return None;
        };
        Some((last - prev) / prev * 100.0)
    }
}

fn check_price(index: usize, field: &'static str, value: f64) -> Result<(), AnalysisError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidInput { index, field, value })
    }
}

/// A bar's high must cover both its close and its low; its low must not sit
/// above the close.  Missing sides fall back to the close and always pass.
fn check_range(index: usize, bar: &Bar) -> Result<(), AnalysisError> {
    let low = bar.low.unwrap_or(bar.close);
    if let Some(high) = bar.high {
        if high < bar.close || high < low {
            return Err(AnalysisError::InvalidInput {
                index,
                field: "high",
                value: high,
            });
        }
    }
    if let Some(low) = bar.low {
        if low > bar.close {
            return Err(AnalysisError::InvalidInput {
                index,
                field: "low",
                value: low,
            });
        }
    }
    Ok(())
}
