// =============================================================================
// Breakout signal evaluation
// =============================================================================
//
// Six boolean conditions for the consolidation-breakout setup.  As with the
// reversal set, an undefined indicator suppresses its signal.

use crate::indicators::IndicatorSet;
use crate::market_data::OhlcvSeries;
use crate::patterns::signal::BreakoutSignal;

/// Volume ratio above this marks a surge.
const VOLUME_SURGE: f64 = 1.5;
/// Close within this fraction of the 52-week high counts as "near" (5 %).
const HIGH_52W_TOLERANCE: f64 = 0.05;
/// RSI below this still has room to run.
const RSI_OVERBOUGHT: f64 = 70.0;

/// Evaluate the breakout signal set.  Returns the triggered signals with the
/// numeric inputs each one consumed.
pub fn evaluate(series: &OhlcvSeries, indicators: &IndicatorSet) -> Vec<BreakoutSignal> {
    let mut triggered = Vec::new();

    let Some(last) = series.last_bar() else {
        return triggered;
    };
    let close = last.close;

    if let (Some(sma_20), Some(sma_50)) = (indicators.sma_20, indicators.sma_50) {
        if close > sma_20 && sma_20 > sma_50 {
            triggered.push(BreakoutSignal::UptrendFormation { close, sma_20, sma_50 });
        }
    }

    if let Some(bb) = &indicators.bollinger {
        if close >= bb.upper {
            triggered.push(BreakoutSignal::UpperBandBreak {
                close,
                upper_band: bb.upper,
            });
        }
    }

    if let Some(volume_ratio) = indicators.volume_ratio {
        if volume_ratio > VOLUME_SURGE {
            triggered.push(BreakoutSignal::VolumeSurge { volume_ratio });
        }
    }

    if let Some(high_52w) = indicators.high_52w {
        if close >= high_52w * (1.0 - HIGH_52W_TOLERANCE) {
            triggered.push(BreakoutSignal::NearFiftyTwoWeekHigh { close, high_52w });
        }
    }

    if let Some(macd) = &indicators.macd {
        if macd.bullish() {
            triggered.push(BreakoutSignal::MacdBullish {
                line: macd.line,
                signal_line: macd.signal,
            });
        }
    }

    if let Some(rsi) = indicators.rsi_14 {
        if rsi < RSI_OVERBOUGHT {
            triggered.push(BreakoutSignal::RsiRoomToRun { rsi });
        }
    }

    triggered
}
