// =============================================================================
// Average True Range (ATR) — Wilder's Smoothing Method
// =============================================================================
//
// ATR measures volatility by decomposing the entire range of a bar.
//
// True Range (TR) for each bar:
//   TR = max(H - L, |H - prevClose|, |L - prevClose|)
//
// ATR is then the smoothed average of TR using Wilder's method:
//   ATR_0   = SMA of first `period` TR values
//   ATR_t   = (ATR_{t-1} * (period - 1) + TR_t) / period
//
// Default period: 14.  The scorer consumes ATR as a percent of the latest
// close (volatility-expansion threshold: 2 %).
// =============================================================================

use crate::market_data::Bar;

/// Compute the most recent ATR value from a slice of OHLCV bars using
/// Wilder's smoothing method.
///
/// # Returns
/// `None` when:
/// - `period` is zero.
/// - There are fewer than `period + 1` bars (we need `period` TR values,
///   each requiring a previous bar for the True Range calculation).
/// - Any intermediate value is non-finite.
pub fn calculate_atr(bars: &[Bar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period + 1 {
        return None;
    }

    let mut tr_values: Vec<f64> = Vec::with_capacity(bars.len() - 1);
    for i in 1..bars.len() {
        let high = bars[i].high;
        let low = bars[i].low;
        let prev_close = bars[i - 1].close;

        // f64::max ignores NaN operands, so check the inputs directly.
        if !high.is_finite() || !low.is_finite() || !prev_close.is_finite() {
            return None;
        }

        let hl = high - low;
        let hc = (high - prev_close).abs();
        let lc = (low - prev_close).abs();

        tr_values.push(hl.max(hc).max(lc));
    }

    // Seed with the SMA of the first `period` TR values.
    let seed: f64 = tr_values[..period].iter().sum::<f64>() / period as f64;
    if !seed.is_finite() {
        return None;
    }

    let period_f = period as f64;
    let mut atr = seed;
    for &tr in &tr_values[period..] {
        atr = (atr * (period_f - 1.0) + tr) / period_f;
        if !atr.is_finite() {
            return None;
        }
    }

    Some(atr)
}

/// ATR as a percentage of the latest close.
///
/// Useful for comparing volatility across instruments with different price
/// scales; `None` when ATR is undefined or the latest close is zero.
pub fn calculate_atr_pct(bars: &[Bar], period: usize) -> Option<f64> {
    let atr = calculate_atr(bars, period)?;
    let last_close = bars.last()?.close;
    if last_close == 0.0 {
        return None;
    }
    let pct = (atr / last_close) * 100.0;
    pct.is_finite().then_some(pct)
}
