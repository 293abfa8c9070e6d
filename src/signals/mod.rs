// =============================================================================
// Signals Module
// =============================================================================
//
// Turns indicator readings into a decision:
// - Weighted rule scoring (composite 0..=100 score plus fired rules)
// - Score-to-recommendation mapping

pub mod recommendation;
pub mod weighted_score;

pub use recommendation::Recommendation;
pub use weighted_score::{ScoreResult, SignalContribution, SignalWeights, WeightedScorer};
