// =============================================================================
// Instrument classification
// =============================================================================
//
// Turns a free-form user query ("2330", "AAPL", "btc") into a typed instrument
// before any data is fetched.  The engine itself never looks at instruments;
// only data sources and reports do.

use serde::{Deserialize, Serialize};

/// Exchange an equity trades on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    Taiwan,
    UnitedStates,
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Taiwan => write!(f, "TW"),
            Self::UnitedStates => write!(f, "US"),
        }
    }
}

/// Something we can fetch a price series for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instrument {
    Equity { market: Market, symbol: String },
    Crypto { id: String },
}

/// Crypto names and tickers recognised as coins rather than equity tickers.
const KNOWN_CRYPTO: &[&str] = &[
    "bitcoin", "btc", "ethereum", "eth", "bnb", "solana", "cardano", "dogecoin", "ripple", "xrp",
];

impl Instrument {
    /// Classify a user query.
    ///
    /// - four ASCII digits => Taiwan-listed equity
    /// - a known coin name or ticker (case-insensitive) => crypto, with tickers
    ///   mapped to the coin id (`btc` => `bitcoin`)
    /// - anything else => US equity, upper-cased
    ///
    /// Returns `None` for blank input.
    pub fn classify(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Some(Self::Equity {
                market: Market::Taiwan,
                symbol: trimmed.to_string(),
            });
        }

        let lower = trimmed.to_ascii_lowercase();
        if KNOWN_CRYPTO.contains(&lower.as_str()) {
            let id = match lower.as_str() {
                "btc" => "bitcoin".to_string(),
                "eth" => "ethereum".to_string(),
                "xrp" => "ripple".to_string(),
                _ => lower,
            };
            return Some(Self::Crypto { id });
        }

        Some(Self::Equity {
            market: Market::UnitedStates,
            symbol: trimmed.to_ascii_uppercase(),
        })
    }

    /// Key a data source uses to look this instrument up.
    pub fn provider_symbol(&self) -> String {
        match self {
            Self::Equity {
                market: Market::Taiwan,
                symbol,
            } => format!("{symbol}.TW"),
            Self::Equity { symbol, .. } => symbol.clone(),
            Self::Crypto { id } => id.clone(),
        }
    }

    /// Default quote currency when the data source does not state one.
    pub fn currency(&self) -> &'static str {
        match self {
            Self::Equity {
                market: Market::Taiwan,
                ..
            } => "TWD",
            _ => "USD",
        }
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equity { market, symbol } => write!(f, "{symbol} ({market})"),
            Self::Crypto { id } => write!(f, "{id} (crypto)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_digits_is_taiwan_equity() {
        let inst = Instrument::classify(" 2330 ").unwrap();
        assert_eq!(
            inst,
            Instrument::Equity {
                market: Market::Taiwan,
                symbol: "2330".into()
            }
        );
        assert_eq!(inst.provider_symbol(), "2330.TW");
        assert_eq!(inst.currency(), "TWD");
    }

    #[test]
    fn crypto_tickers_map_to_coin_ids() {
        assert_eq!(
            Instrument::classify("BTC"),
            Some(Instrument::Crypto { id: "bitcoin".into() })
        );
        assert_eq!(
            Instrument::classify("eth"),
            Some(Instrument::Crypto { id: "ethereum".into() })
        );
        assert_eq!(
            Instrument::classify("xrp"),
            Some(Instrument::Crypto { id: "ripple".into() })
        );
        assert_eq!(
            Instrument::classify("Solana"),
            Some(Instrument::Crypto { id: "solana".into() })
        );
    }

    #[test]
    fn everything_else_is_us_equity() {
        let inst = Instrument::classify("aapl").unwrap();
        assert_eq!(
            inst,
            Instrument::Equity {
                market: Market::UnitedStates,
                symbol: "AAPL".into()
            }
        );
        assert_eq!(inst.provider_symbol(), "AAPL");
        assert_eq!(inst.currency(), "USD");

        // Five digits is not a Taiwan code.
        assert!(matches!(
            Instrument::classify("12345"),
            Some(Instrument::Equity {
                market: Market::UnitedStates,
                ..
            })
        ));
    }

    #[test]
    fn blank_input_is_none() {
        assert!(Instrument::classify("   ").is_none());
    }

    #[test]
    fn serialises_with_kind_tag() {
        let json = serde_json::to_value(Instrument::Crypto { id: "bitcoin".into() }).unwrap();
        assert_eq!(json["kind"], "crypto");
        assert_eq!(json["id"], "bitcoin");
    }

    #[test]
    fn display() {
        let inst = Instrument::classify("2330").unwrap();
        assert_eq!(inst.to_string(), "2330 (TW)");
    }
}
