// =============================================================================
// Reversal signal evaluation
// =============================================================================
//
// Six boolean conditions, each evaluated only when its inputs are defined.
// An undefined indicator suppresses the dependent signal — false, not error.

use crate::indicators::IndicatorSet;
use crate::market_data::OhlcvSeries;
use crate::patterns::signal::ReversalSignal;

/// RSI below this is oversold.
const RSI_OVERSOLD: f64 = 30.0;
/// Tolerance above the lower band that still counts as a touch (0.5 %).
const LOWER_BAND_TOLERANCE: f64 = 0.005;
/// Close may sit up to this fraction above the rolling low (5 %).
const SUPPORT_TOLERANCE: f64 = 0.05;
/// Volume ratio above this confirms the signal bar.
const VOLUME_CONFIRMATION: f64 = 1.0;
/// ATR-percent-of-close above this marks expanding volatility.
const ATR_EXPANSION_PCT: f64 = 2.0;

/// Evaluate the reversal signal set.  Returns the triggered signals with the
/// numeric inputs each one consumed.
pub fn evaluate(series: &OhlcvSeries, indicators: &IndicatorSet) -> Vec<ReversalSignal> {
    let mut triggered = Vec::new();

    let Some(last) = series.last_bar() else {
        return triggered;
    };
    let close = last.close;

    if let Some(rsi) = indicators.rsi_14 {
        if rsi < RSI_OVERSOLD {
            triggered.push(ReversalSignal::RsiOversold { rsi });
        }
    }

    if let Some(bb) = &indicators.bollinger {
        if close <= bb.lower * (1.0 + LOWER_BAND_TOLERANCE) {
            triggered.push(ReversalSignal::LowerBandTouch {
                close,
                lower_band: bb.lower,
            });
        }
    }

    if let Some(macd) = &indicators.macd {
        if let Some(prev_histogram) = macd.prev_histogram {
            if macd.bullish_crossover() {
                triggered.push(ReversalSignal::MacdBullishCrossover {
                    histogram: macd.histogram,
                    prev_histogram,
                });
            }
        }
    }

    if let Some(support_low) = indicators.support_low {
        if support_bounce(series, close, support_low) {
            triggered.push(ReversalSignal::SupportBounce { close, support_low });
        }
    }

    if let Some(volume_ratio) = indicators.volume_ratio {
        if volume_ratio > VOLUME_CONFIRMATION {
            triggered.push(ReversalSignal::VolumeConfirmation { volume_ratio });
        }
    }

    if let Some(atr_pct) = indicators.atr_pct {
        if atr_pct > ATR_EXPANSION_PCT {
            triggered.push(ReversalSignal::VolatilityExpansion { atr_pct });
        }
    }

    triggered
}

/// Close near the rolling low, with the two most recent closes rising.
fn support_bounce(series: &OhlcvSeries, close: f64, support_low: f64) -> bool {
    if support_low <= 0.0 {
        return false;
    }
    let near_support = close >= support_low && close <= support_low * (1.0 + SUPPORT_TOLERANCE);

    let bars = series.bars();
    let rising = bars.len() >= 2 && close > bars[bars.len() - 2].close;

    near_support && rising
}
