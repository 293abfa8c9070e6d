// =============================================================================
// Recommendation — Five-way call derived from the composite score
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::types::Tone;

/// Discrete call derived from the composite score.
///
/// | score  | recommendation |
/// |--------|----------------|
/// | >= 70  | StrongBuy      |
/// | 55..70 | Buy            |
/// | 45..55 | Hold           |
/// | 30..45 | Sell           |
/// | < 30   | StrongSell     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl Recommendation {
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => Self::StrongBuy,
            55..=69 => Self::Buy,
            45..=54 => Self::Hold,
            30..=44 => Self::Sell,
            _ => Self::StrongSell,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::StrongBuy => "strong buy",
            Self::Buy => "buy",
            Self::Hold => "hold",
            Self::Sell => "sell",
            Self::StrongSell => "strong sell",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::StrongBuy | Self::Buy => Tone::Bullish,
            Self::Hold => Tone::Neutral,
            Self::Sell | Self::StrongSell => Tone::Bearish,
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
