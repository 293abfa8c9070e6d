// =============================================================================
// Shared types used across the scoring engine
// =============================================================================

use serde::{Deserialize, Serialize};

/// Which way a fired rule pushes the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalDirection {
    Buy,
    Sell,
    Neutral,
}

impl std::fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
            Self::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Display tone of a recommendation: bullish, neutral or bearish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Bullish,
    Neutral,
    Bearish,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "Bullish"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Bearish => write!(f, "Bearish"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_serialises_lowercase() {
        assert_eq!(serde_json::to_string(&SignalDirection::Buy).unwrap(), "\"buy\"");
        assert_eq!(SignalDirection::Neutral.to_string(), "NEUTRAL");
    }

    #[test]
    fn tone_display() {
        assert_eq!(Tone::Bearish.to_string(), "Bearish");
    }
}
