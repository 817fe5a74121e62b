// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// MACD line   = EMA(12) - EMA(26)
// Signal line = EMA(9) of the MACD line
// Histogram   = MACD line - signal line
//
// The scorer uses two readings:
//   - bullish crossover: the histogram flipped from negative to positive on
//     the most recent bar (previous-bar sign vs current-bar sign),
//   - bullish: the MACD line is currently above the signal line.
// =============================================================================

use crate::indicators::ema::calculate_ema;

/// Latest MACD reading, plus the previous histogram value for crossover
/// detection.
#[derive(Debug, Clone, Copy)]
pub struct MacdSnapshot {
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
    /// Histogram one bar earlier; `None` when the signal series has only one
    /// point, in which case a crossover cannot be established.
    pub prev_histogram: Option<f64>,
}

impl MacdSnapshot {
    /// MACD line crossed from below to above the signal line on the most
    /// recent bar.
    pub fn bullish_crossover(&self) -> bool {
        matches!(self.prev_histogram, Some(prev) if prev < 0.0 && self.histogram > 0.0)
    }

    /// MACD line currently above the signal line (no crossover required).
    pub fn bullish(&self) -> bool {
        self.line > self.signal
    }
}

/// Compute the latest MACD snapshot from closing prices.
///
/// # Edge cases
/// - Needs enough closes for EMA(26) plus 9 MACD points to seed the signal
///   line (34 closes); otherwise `None`.
/// - Non-finite intermediate values => `None`.
pub fn calculate_macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Option<MacdSnapshot> {
    if fast == 0 || slow == 0 || signal_period == 0 || fast >= slow {
        return None;
    }

    let ema_fast = calculate_ema(closes, fast);
    let ema_slow = calculate_ema(closes, slow);
    if ema_slow.is_empty() {
        return None;
    }

    // Both series end at the latest close; align them from the tail.
    let len = ema_slow.len().min(ema_fast.len());
    let fast_tail = &ema_fast[ema_fast.len() - len..];
    let slow_tail = &ema_slow[ema_slow.len() - len..];

    let macd_series: Vec<f64> = fast_tail
        .iter()
        .zip(slow_tail.iter())
        .map(|(f, s)| f - s)
        .collect();

    let signal_series = calculate_ema(&macd_series, signal_period);
    let signal = *signal_series.last()?;
    let line = *macd_series.last()?;
    let histogram = line - signal;

    if !line.is_finite() || !signal.is_finite() {
        return None;
    }

    // Previous histogram needs the previous point of both series.
    let prev_histogram = if signal_series.len() >= 2 && macd_series.len() >= 2 {
        let prev_line = macd_series[macd_series.len() - 2];
        let prev_signal = signal_series[signal_series.len() - 2];
        let prev = prev_line - prev_signal;
        prev.is_finite().then_some(prev)
    } else {
        None
    };

    Some(MacdSnapshot {
        line,
        signal,
        histogram,
        prev_histogram,
    })
}

/// MACD with the standard 12/26/9 parameters.
pub fn standard_macd(closes: &[f64]) -> Option<MacdSnapshot> {
    calculate_macd(closes, 12, 26, 9)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macd_insufficient_data() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        // 30 closes gives 5 MACD points — not enough for a 9-period signal.
        assert!(standard_macd(&closes).is_none());
    }

    #[test]
    fn macd_degenerate_periods() {
        let closes: Vec<f64> = (1..=60).map(|x| x as f64).collect();
        assert!(calculate_macd(&closes, 0, 26, 9).is_none());
        assert!(calculate_macd(&closes, 12, 0, 9).is_none());
        assert!(calculate_macd(&closes, 12, 26, 0).is_none());
        assert!(calculate_macd(&closes, 26, 12, 9).is_none(), "fast must be < slow");
    }

    #[test]
    fn macd_uptrend_is_positive_and_bullish() {
        // An accelerating advance keeps the fast EMA genuinely ahead of the
        // slow one and the line genuinely ahead of its own signal.  (On a
        // perfectly linear ramp all three converge and the histogram is a
        // rounding residue of arbitrary sign.)
        let closes: Vec<f64> = (0..120).map(|i| 100.0 + 0.02 * (i * i) as f64).collect();
        let macd = standard_macd(&closes).unwrap();
        assert!(macd.line > 1e-3);
        assert!(macd.histogram > 1e-3);
        assert!(macd.bullish());
    }

    #[test]
    fn macd_downtrend_is_negative() {
        let closes: Vec<f64> = (0..120).map(|i| 400.0 - 0.02 * (i * i) as f64).collect();
        let macd = standard_macd(&closes).unwrap();
        assert!(macd.line < -1e-3);
        assert!(macd.histogram < -1e-3);
        assert!(!macd.bullish());
    }

    #[test]
    fn macd_flat_market_is_zero() {
        let closes = vec![100.0; 120];
        let macd = standard_macd(&closes).unwrap();
        assert!(macd.line.abs() < 1e-10);
        assert!(macd.histogram.abs() < 1e-10);
        assert!(!macd.bullish());
        assert!(!macd.bullish_crossover());
    }

    #[test]
    fn macd_crossover_on_v_shaped_reversal() {
        // An accelerating decline (histogram genuinely negative) followed by
        // a sharp rally: somewhere along the rally the histogram flips sign.
        // Walk the series bar by bar and require that exactly this flip is
        // what bullish_crossover() reports.
        let mut closes: Vec<f64> = (0..80).map(|i| 300.0 - 0.03 * (i * i) as f64).collect();
        let trough = *closes.last().unwrap();
        for i in 1..=40 {
            closes.push(trough + (i as f64) * 3.0);
        }

        let mut saw_crossover = false;
        for end in 40..=closes.len() {
            if let Some(macd) = standard_macd(&closes[..end]) {
                if macd.bullish_crossover() {
                    let prev = macd.prev_histogram.unwrap();
                    assert!(prev < 0.0 && macd.histogram > 0.0);
                    saw_crossover = true;
                }
            }
        }
        assert!(saw_crossover, "expected a bullish crossover during the rally");
    }

    #[test]
    fn macd_prev_histogram_tracks_one_bar_back() {
        let closes: Vec<f64> = (1..=120).map(|x| (x as f64).sin() * 10.0 + 100.0).collect();
        let full = standard_macd(&closes).unwrap();
        let trimmed = standard_macd(&closes[..closes.len() - 1]).unwrap();
        let prev = full.prev_histogram.unwrap();
        assert!(
            (prev - trimmed.histogram).abs() < 1e-9,
            "prev_histogram {prev} should equal last bar's histogram {}",
            trimmed.histogram
        );
    }
}
