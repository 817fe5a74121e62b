// =============================================================================
// Engine error taxonomy
// =============================================================================
//
// Only two things can genuinely fail inside the engine: an empty input series
// and a series that violates the time-ordering invariant.  Everything else
// (short series, zero denominators) degrades to undefined indicator values
// rather than erroring — see the indicators module.

use thiserror::Error;

/// Errors produced by the indicator / pattern-scoring engine.
///
/// A failure here is local to one symbol; the screening run logs it and
/// moves on to the next symbol.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// The input series has no bars at all.  Short-but-non-empty series do
    /// not produce this error; they yield undefined indicators instead.
    #[error("series for {symbol} is empty")]
    InsufficientData { symbol: String },

    /// Timestamps must be strictly increasing.
    #[error("series for {symbol}: timestamp at bar {index} is not after the previous bar")]
    NonMonotonicTimestamps { symbol: String, index: usize },

    /// Two bars share the same timestamp.
    #[error("series for {symbol}: duplicate timestamp at bar {index}")]
    DuplicateTimestamp { symbol: String, index: usize },
}
