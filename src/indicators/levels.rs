// =============================================================================
// Price levels: rolling support low and 52-week high
// =============================================================================
//
// Both levels fall back to the full series when fewer bars than the nominal
// window are available, so they are defined for any non-empty series.

/// Trading days in roughly one year.
pub const BARS_52_WEEKS: usize = 252;

/// Minimum close over the trailing `lookback` entries (or all, if fewer).
/// Used as the support-bounce reference.
pub fn rolling_low(closes: &[f64], lookback: usize) -> Option<f64> {
    if closes.is_empty() || lookback == 0 {
        return None;
    }

    let start = closes.len().saturating_sub(lookback);
    let mut low = f64::INFINITY;
    for &c in &closes[start..] {
        if !c.is_finite() {
            return None;
        }
        if c < low {
            low = c;
        }
    }
    Some(low)
}

/// Maximum close over the trailing ~252 bars (or all, if fewer).
pub fn high_52w(closes: &[f64]) -> Option<f64> {
    if closes.is_empty() {
        return None;
    }

    let start = closes.len().saturating_sub(BARS_52_WEEKS);
    let mut high = f64::NEG_INFINITY;
    for &c in &closes[start..] {
        if !c.is_finite() {
            return None;
        }
        if c > high {
            high = c;
        }
    }
    Some(high)
}
