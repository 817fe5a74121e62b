// =============================================================================
// Pattern Scoring Module
// =============================================================================
//
// Evaluates the reversal and breakout signal sets against an IndicatorSet,
// then folds the triggered signals into 0-100 scores, a weighted composite,
// and a recommendation tier.

pub mod breakout;
pub mod reversal;
pub mod score;
pub mod signal;

pub use score::{score, PatternScoreRecord};
pub use signal::{BreakoutSignal, ReversalSignal};
