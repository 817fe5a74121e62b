// =============================================================================
// Volume-derived metrics: volume ratio and VWAP
// =============================================================================
//
// Volume ratio = latest volume / mean volume over the trailing window (the
// window includes the current bar).  Values above 1.5 mark a volume surge;
// above 1.0 counts as confirmation for reversal setups.
//
// VWAP = Σ(typical price × volume) / Σ(volume) over the available window,
// typical price = (H + L + C) / 3.

use crate::market_data::Bar;

/// Latest volume divided by the trailing `period`-bar average volume.
///
/// # Edge cases
/// - Fewer than `period` bars => `None` (never a ratio over a partial window)
/// - Zero or non-finite average volume => `None` (no division fault)
pub fn volume_ratio(volumes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || volumes.len() < period {
        return None;
    }

    let window = &volumes[volumes.len() - period..];
    let avg = window.iter().sum::<f64>() / period as f64;
    if avg == 0.0 || !avg.is_finite() {
        return None;
    }

    let latest = *volumes.last()?;
    let ratio = latest / avg;
    ratio.is_finite().then_some(ratio)
}

/// Volume-weighted average price over all supplied bars.
///
/// Defined for any non-empty slice with non-zero total volume; a single bar
/// yields its own typical price.
pub fn calculate_vwap(bars: &[Bar]) -> Option<f64> {
    if bars.is_empty() {
        return None;
    }

    let mut pv_sum = 0.0;
    let mut volume_sum = 0.0;
    for b in bars {
        pv_sum += b.typical_price() * b.volume;
        volume_sum += b.volume;
    }

    if volume_sum == 0.0 {
        return None;
    }

    let vwap = pv_sum / volume_sum;
    vwap.is_finite().then_some(vwap)
}
