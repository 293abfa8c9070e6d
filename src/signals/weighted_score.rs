// =============================================================================
// Weighted Rule Scorer — Fixed heuristic over indicator readings
// =============================================================================
//
// Starts from a neutral base of 50 and adds a signed weight for every rule
// that fires.  Rules are evaluated in a fixed order and the contributions are
// reported in that same order:
//
//   1. RSI          oversold (<30) +15 | overbought (>70) -15 | 40..=60 +5
//   2. MACD         histogram > 0 +12  | otherwise -12
//   3. Bollinger    price < lower +10  | price > upper -10
//   4. MA alignment price > ma1 > ma2 > ... +15 | price < ma1 < ... -15
//   5. Stochastic   K and D < 20 +8    | K and D > 80 -8
//
// RSI readings in 30..40 and 60..=70 deliberately fire nothing.  The final
// score is clamped to [0, 100].
// =============================================================================

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::indicators::{IndicatorSnapshot, MovingAverage};
use crate::types::SignalDirection;

const BASE_SCORE: i32 = 50;

const RSI_OVERSOLD: f64 = 30.0;
const RSI_OVERBOUGHT: f64 = 70.0;
const RSI_NEUTRAL_LOW: f64 = 40.0;
const RSI_NEUTRAL_HIGH: f64 = 60.0;

const STOCH_OVERSOLD: f64 = 20.0;
const STOCH_OVERBOUGHT: f64 = 80.0;

/// One fired rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalContribution {
    pub direction: SignalDirection,
    pub reason: String,
    /// Signed adjustment applied to the score.
    pub weight: i32,
}

/// Result of the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// `raw_score` clamped to [0, 100].
    pub score: u8,
    /// Base score plus every weight, before clamping.
    pub raw_score: i32,
    pub signals: Vec<SignalContribution>,
}

/// Magnitude of each rule's adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalWeights {
    pub rsi_extreme: i32,
    pub rsi_neutral: i32,
    pub macd: i32,
    pub bollinger: i32,
    pub ma_alignment: i32,
    pub stochastic: i32,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            rsi_extreme: 15,
            rsi_neutral: 5,
            macd: 12,
            bollinger: 10,
            ma_alignment: 15,
            stochastic: 8,
        }
    }
}

/// The rule-based scoring engine.
#[derive(Debug, Clone, Default)]
pub struct WeightedScorer {
    weights: SignalWeights,
}

impl WeightedScorer {
    pub fn new(weights: SignalWeights) -> Self {
        Self { weights }
    }

    /// Score `snapshot` against the current `price`.
    pub fn score(&self, price: f64, snapshot: &IndicatorSnapshot) -> ScoreResult {
        let w = &self.weights;
        let mut signals = Vec::with_capacity(5);

        // ── 1. RSI ───────────────────────────────────────────────────────
        let rsi = snapshot.rsi;
        if rsi < RSI_OVERSOLD {
            signals.push(buy(format!("RSI oversold (<{RSI_OVERSOLD})"), w.rsi_extreme));
        } else if rsi > RSI_OVERBOUGHT {
            signals.push(sell(format!("RSI overbought (>{RSI_OVERBOUGHT})"), w.rsi_extreme));
        } else if (RSI_NEUTRAL_LOW..=RSI_NEUTRAL_HIGH).contains(&rsi) {
            signals.push(SignalContribution {
                direction: SignalDirection::Neutral,
                reason: "RSI neutral".to_string(),
                weight: w.rsi_neutral,
            });
        }

        // ── 2. MACD ──────────────────────────────────────────────────────
        if snapshot.macd.histogram > 0.0 {
            signals.push(buy("MACD bullish crossover", w.macd));
        } else {
            signals.push(sell("MACD bearish crossover", w.macd));
        }

        // ── 3. Bollinger Bands ───────────────────────────────────────────
        if price < snapshot.bollinger.lower {
            signals.push(buy("Price below lower Bollinger band", w.bollinger));
        } else if price > snapshot.bollinger.upper {
            signals.push(sell("Price above upper Bollinger band", w.bollinger));
        }

        // ── 4. Moving-average alignment ──────────────────────────────────
        match ma_alignment(price, &snapshot.moving_averages) {
            Some(SignalDirection::Buy) => {
                signals.push(buy("Bullish moving-average alignment", w.ma_alignment))
            }
            Some(SignalDirection::Sell) => {
                signals.push(sell("Bearish moving-average alignment", w.ma_alignment))
            }
            _ => {}
        }

        // ── 5. Stochastic ────────────────────────────────────────────────
        let st = &snapshot.stochastic;
        if st.k < STOCH_OVERSOLD && st.d < STOCH_OVERSOLD {
            signals.push(buy("Stochastic oversold", w.stochastic));
        } else if st.k > STOCH_OVERBOUGHT && st.d > STOCH_OVERBOUGHT {
            signals.push(sell("Stochastic overbought", w.stochastic));
        }

        let raw_score = BASE_SCORE + signals.iter().map(|s| s.weight).sum::<i32>();
        let score = raw_score.clamp(0, 100) as u8;

        for s in &signals {
            debug!(direction = %s.direction, weight = s.weight, reason = %s.reason, "rule fired");
        }
        debug!(raw_score, score, fired = signals.len(), "score computed");

        ScoreResult {
            score,
            raw_score,
            signals,
        }
    }
}

fn buy(reason: impl Into<String>, weight: i32) -> SignalContribution {
    SignalContribution {
        direction: SignalDirection::Buy,
        reason: reason.into(),
        weight,
    }
}

fn sell(reason: impl Into<String>, weight: i32) -> SignalContribution {
    SignalContribution {
        direction: SignalDirection::Sell,
        reason: reason.into(),
        weight: -weight,
    }
}

/// `Buy` when price and the averages (fastest first) are strictly
/// descending, `Sell` when strictly ascending, otherwise `None`.
fn ma_alignment(price: f64, averages: &[MovingAverage]) -> Option<SignalDirection> {
    if averages.is_empty() {
        return None;
    }
    let chain: Vec<f64> = std::iter::once(price)
        .chain(averages.iter().map(|ma| ma.value))
        .collect();

    if chain.windows(2).all(|w| w[0] > w[1]) {
        Some(SignalDirection::Buy)
    } else if chain.windows(2).all(|w| w[0] < w[1]) {
        Some(SignalDirection::Sell)
    } else {
        None
    }
}
