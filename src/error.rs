// =============================================================================
// Engine Errors
// =============================================================================
//
// Typed failures raised by the indicator and scoring engine.  Application code
// (config IO, data sources, the CLI) wraps these in `anyhow::Error`.
// =============================================================================

use thiserror::Error;

/// Every way an analysis call can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The series is shorter than the lookback an indicator needs.
    #[error("{indicator}: insufficient data: required = {required}, available = {available}")]
    InsufficientData {
        indicator: &'static str,
        required: usize,
        available: usize,
    },

    /// A price field is non-positive or non-finite, or a volume is negative.
    #[error("invalid {field} at bar {index}: {value}")]
    InvalidInput {
        index: usize,
        field: &'static str,
        value: f64,
    },

    /// A dated bar precedes the bar before it.
    #[error("bar {index} is dated before its predecessor")]
    OutOfOrder { index: usize },

    /// Lookback periods that cannot produce a meaningful analysis.
    #[error("invalid analyzer config: {0}")]
    InvalidConfig(String),
}

impl AnalysisError {
    pub(crate) fn insufficient(indicator: &'static str, required: usize, available: usize) -> Self {
        Self::InsufficientData {
            indicator,
            required,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_data_message_names_indicator() {
        let err = AnalysisError::insufficient("rsi", 15, 3);
        assert_eq!(
            err.to_string(),
            "rsi: insufficient data: required = 15, available = 3"
        );
    }

    #[test]
    fn invalid_input_message() {
        let err = AnalysisError::InvalidInput {
            index: 4,
            field: "close",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "invalid close at bar 4: -1");
    }
}
