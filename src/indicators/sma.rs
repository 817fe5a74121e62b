// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Trailing-window arithmetic mean of the most recent `period` values.
// A series shorter than the window reports `None` rather than a mean over a
// partial window, so short histories never masquerade as full ones.

/// Most recent SMA value over the trailing `period` entries.
///
/// # Edge cases
/// - `period == 0` => `None`
/// - `values.len() < period` => `None` (no partial-window averages)
/// - Non-finite result => `None`
pub fn calculate_sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }

    let window = &values[values.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;

    if mean.is_finite() {
        Some(mean)
    } else {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_empty_input() {
        assert!(calculate_sma(&[], 20).is_none());
    }

    #[test]
    fn sma_period_zero() {
        assert!(calculate_sma(&[1.0, 2.0], 0).is_none());
    }

    #[test]
    fn sma_insufficient_data() {
        assert!(calculate_sma(&[1.0, 2.0, 3.0], 20).is_none());
    }

    #[test]
    fn sma_uses_trailing_window() {
        // Last 3 of [1,2,3,4,5] => (3+4+5)/3 = 4.0
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let sma = calculate_sma(&values, 3).unwrap();
        assert!((sma - 4.0).abs() < 1e-12);
    }

    #[test]
    fn sma_period_equals_length() {
        let values = [2.0, 4.0, 6.0];
        let sma = calculate_sma(&values, 3).unwrap();
        assert!((sma - 4.0).abs() < 1e-12);
    }

    #[test]
    fn sma_nan_input_returns_none() {
        assert!(calculate_sma(&[1.0, f64::NAN, 3.0], 3).is_none());
    }
}
