// =============================================================================
// Pattern Scorer — equal-share signal scoring with a weighted composite
// =============================================================================
//
// Each pattern family has six signals; every triggered signal contributes an
// equal share of 100 points (100/6 ≈ 16.67).  The composite blends the two
// family scores 40/60 — breakout setups are judged the primary actionable
// signal, so they carry the larger weight.  The weights are a preserved
// design choice, not a calibrated one; do not retune them here.

use serde::Serialize;

use crate::errors::ScreenError;
use crate::indicators::IndicatorSet;
use crate::market_data::OhlcvSeries;
use crate::patterns::signal::{BreakoutSignal, ReversalSignal};
use crate::patterns::{breakout, reversal};
use crate::types::Recommendation;

/// Number of signals in each pattern family.
const SIGNALS_PER_PATTERN: usize = 6;
/// Composite weight on the reversal score.
const REVERSAL_WEIGHT: f64 = 0.4;
/// Composite weight on the breakout score.
const BREAKOUT_WEIGHT: f64 = 0.6;

/// Scored result for one symbol in one screening run.  Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct PatternScoreRecord {
    pub symbol: String,
    pub reversal_score: f64,
    pub breakout_score: f64,
    pub composite_score: f64,
    pub reversal_signals: Vec<ReversalSignal>,
    pub breakout_signals: Vec<BreakoutSignal>,
    pub recommendation: Recommendation,
}

/// Evaluate both signal sets and fold them into a score record.
///
/// Never fails for a valid series/indicator pair; the only error path is an
/// empty series, surfaced here so callers can run fetch → score in one step.
pub fn score(
    series: &OhlcvSeries,
    indicators: &IndicatorSet,
) -> Result<PatternScoreRecord, ScreenError> {
    if series.is_empty() {
        return Err(ScreenError::InsufficientData {
            symbol: series.symbol().to_string(),
        });
    }

    let reversal_signals = reversal::evaluate(series, indicators);
    let breakout_signals = breakout::evaluate(series, indicators);

    let reversal_score = share_score(reversal_signals.len());
    let breakout_score = share_score(breakout_signals.len());
    let composite_score = REVERSAL_WEIGHT * reversal_score + BREAKOUT_WEIGHT * breakout_score;

    Ok(PatternScoreRecord {
        symbol: series.symbol().to_string(),
        reversal_score,
        breakout_score,
        composite_score,
        reversal_signals,
        breakout_signals,
        recommendation: Recommendation::from_composite(composite_score),
    })
}

/// Equal-share score: `triggered` signals out of six, as points out of 100,
/// rounded to one decimal and clamped to [0, 100].
fn share_score(triggered: usize) -> f64 {
    let raw = triggered as f64 * (100.0 / SIGNALS_PER_PATTERN as f64);
    let rounded = (raw * 10.0).round() / 10.0;
    rounded.clamp(0.0, 100.0)
}
