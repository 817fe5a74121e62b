// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average.
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_t      = value_t * multiplier + EMA_{t-1} * (1 - multiplier)
//
// The very first EMA value is seeded with the SMA of the first `period`
// entries.
// =============================================================================

/// Compute the EMA series for `values` with the given look-back `period`.
///
/// Returns an empty `Vec` when the input is too short or the period is zero.
/// Each output element corresponds to an input starting at index `period - 1`.
///
/// # Edge cases
/// - `period == 0` => empty vec (division by zero guard)
/// - `values.len() < period` => empty vec
/// - A non-finite intermediate value stops the series; downstream consumers
///   should not trust a broken tail.
pub fn calculate_ema(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let multiplier = 2.0 / (period + 1) as f64;

    // Seed: SMA of the first `period` values.
    let sma: f64 = values[..period].iter().sum::<f64>() / period as f64;
    if !sma.is_finite() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(values.len() - period + 1);
    result.push(sma);

    let mut prev_ema = sma;
    for &value in &values[period..] {
        let ema = value * multiplier + prev_ema * (1.0 - multiplier);
        if !ema.is_finite() {
            break;
        }
        result.push(ema);
        prev_ema = ema;
    }

    result
}

/// Most recent EMA value, or `None` when the series cannot be computed.
pub fn current_ema(values: &[f64], period: usize) -> Option<f64> {
    calculate_ema(values, period).last().copied()
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ema_empty_input() {
        assert!(calculate_ema(&[], 5).is_empty());
    }

    #[test]
    fn ema_period_zero() {
        assert!(calculate_ema(&[1.0, 2.0, 3.0], 0).is_empty());
    }

    #[test]
    fn ema_insufficient_data() {
        assert!(calculate_ema(&[1.0, 2.0], 5).is_empty());
    }

    #[test]
    fn ema_period_equals_length() {
        let values = vec![2.0, 4.0, 6.0];
        let ema = calculate_ema(&values, 3);
        assert_eq!(ema.len(), 1);
        // Seed is the SMA = (2+4+6)/3 = 4.0
        assert!((ema[0] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn ema_known_values() {
        // 5-period EMA of [1..10]: SMA seed 3.0, multiplier 2/6 = 1/3.
        let values: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let ema = calculate_ema(&values, 5);
        assert_eq!(ema.len(), 6);

        let mult = 2.0 / 6.0;
        let mut expected = 3.0;
        let mut expected_vec = vec![expected];
        for &v in &values[5..] {
            expected = v * mult + expected * (1.0 - mult);
            expected_vec.push(expected);
        }
        for (a, b) in ema.iter().zip(expected_vec.iter()) {
            assert!((a - b).abs() < 1e-10, "got {a}, expected {b}");
        }
    }

    #[test]
    fn ema_stops_on_nan() {
        let values = vec![1.0, 2.0, 3.0, f64::NAN, 5.0];
        let ema = calculate_ema(&values, 3);
        // Seed survives, the NaN bar truncates the rest.
        assert_eq!(ema.len(), 1);
    }

    #[test]
    fn current_ema_matches_series_tail() {
        let values: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let series = calculate_ema(&values, 12);
        assert_eq!(current_ema(&values, 12), series.last().copied());
    }
}
