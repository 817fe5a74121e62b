// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators consumed by the
// pattern scorer.  Every public function returns `Option<T>` (or a series
// that may be empty) so callers are forced to handle insufficient-data and
// numerical-edge-case scenarios — an undefined indicator is a degraded but
// valid state, never an error.

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod levels;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod snapshot;
pub mod volume;

pub use snapshot::{compute_indicators, IndicatorSet};
