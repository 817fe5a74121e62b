// =============================================================================
// Bollinger Bands
// =============================================================================
//
// A middle band (SMA) flanked by an upper band (SMA + k*σ) and a lower band
// (SMA - k*σ), σ taken over the same window.  The band width,
// (upper - lower) / middle, gives squeeze/expansion context.

/// Result of a Bollinger Band calculation.
#[derive(Debug, Clone, Copy)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    /// Normalised band width: (upper - lower) / middle.
    pub width: f64,
}

/// Calculate Bollinger Bands over the trailing `period` closes.
///
/// Returns `None` when:
/// - Fewer than `period` data points.
/// - Middle band is zero (degenerate input, width undefined).
/// - Any band is non-finite.
pub fn calculate_bollinger(closes: &[f64], period: usize, num_std: f64) -> Option<BollingerBands> {
    if period == 0 || closes.len() < period {
        return None;
    }

    let window = &closes[closes.len() - period..];
    let middle = window.iter().sum::<f64>() / period as f64;

    if middle == 0.0 {
        return None;
    }

    let variance = window.iter().map(|x| (x - middle).powi(2)).sum::<f64>() / period as f64;
    let std_dev = variance.sqrt();

    let upper = middle + num_std * std_dev;
    let lower = middle - num_std * std_dev;
    let width = (upper - lower) / middle;

    if width.is_finite() && upper.is_finite() && lower.is_finite() {
        Some(BollingerBands {
            upper,
            middle,
            lower,
            width,
        })
    } else {
        None
    }
}
