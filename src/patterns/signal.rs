// =============================================================================
// Named pattern signals
// =============================================================================
//
// Each signal is a tagged variant carrying the exact numeric inputs it
// consumed, so a triggered-signals report is both human-readable and
// re-verifiable after the fact.

use serde::Serialize;

/// Signals that indicate a potential downtrend reversal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum ReversalSignal {
    /// RSI below 30.
    RsiOversold { rsi: f64 },
    /// Close at or below the lower Bollinger band (small tolerance).
    LowerBandTouch { close: f64, lower_band: f64 },
    /// MACD histogram flipped from negative to positive on the latest bar.
    MacdBullishCrossover { histogram: f64, prev_histogram: f64 },
    /// Close near the rolling low with the last two closes rising.
    SupportBounce { close: f64, support_low: f64 },
    /// Volume ratio above 1.0 on the signal bar.
    VolumeConfirmation { volume_ratio: f64 },
    /// ATR above 2 % of the close.
    VolatilityExpansion { atr_pct: f64 },
}

impl ReversalSignal {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RsiOversold { .. } => "RSI oversold",
            Self::LowerBandTouch { .. } => "Lower-band touch",
            Self::MacdBullishCrossover { .. } => "MACD bullish crossover",
            Self::SupportBounce { .. } => "Support bounce",
            Self::VolumeConfirmation { .. } => "Volume confirmation",
            Self::VolatilityExpansion { .. } => "Volatility expansion",
        }
    }
}

/// Signals that indicate a potential consolidation breakout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum BreakoutSignal {
    /// Close > SMA20 > SMA50.
    UptrendFormation { close: f64, sma_20: f64, sma_50: f64 },
    /// Close at or above the upper Bollinger band.
    UpperBandBreak { close: f64, upper_band: f64 },
    /// Volume ratio above 1.5.
    VolumeSurge { volume_ratio: f64 },
    /// Close within 5 % of the 52-week high.
    NearFiftyTwoWeekHigh { close: f64, high_52w: f64 },
    /// MACD line above the signal line.
    MacdBullish { line: f64, signal_line: f64 },
    /// RSI below 70 — not yet overbought.
    RsiRoomToRun { rsi: f64 },
}

impl BreakoutSignal {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UptrendFormation { .. } => "Uptrend formation",
            Self::UpperBandBreak { .. } => "Upper-band break",
            Self::VolumeSurge { .. } => "Volume surge",
            Self::NearFiftyTwoWeekHigh { .. } => "Near 52-week high",
            Self::MacdBullish { .. } => "MACD bullish",
            Self::RsiRoomToRun { .. } => "RSI room to run",
        }
    }
}
