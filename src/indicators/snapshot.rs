// =============================================================================
// Indicator Calculator — one IndicatorSet per symbol per run
// =============================================================================
//
// `compute_indicators` is a pure function of the input series: no I/O, no
// shared state, deterministic.  It errors only on an empty series; a series
// shorter than an indicator's window marks that indicator `None` (undefined)
// rather than computing it on a partial window.  Downstream signal checks
// treat `None` as "does not trigger", never as an error.

use crate::errors::ScreenError;
use crate::indicators::atr::{calculate_atr, calculate_atr_pct};
use crate::indicators::bollinger::{calculate_bollinger, BollingerBands};
use crate::indicators::ema::current_ema;
use crate::indicators::levels::{high_52w, rolling_low};
use crate::indicators::macd::{standard_macd, MacdSnapshot};
use crate::indicators::rsi::current_rsi;
use crate::indicators::sma::calculate_sma;
use crate::indicators::volume::{calculate_vwap, volume_ratio};
use crate::market_data::OhlcvSeries;

/// Trailing window for the average-volume denominator of the volume ratio.
pub const VOLUME_WINDOW: usize = 20;

/// Latest values of every indicator the pattern scorer consumes.
///
/// Each windowed value is `None` when the series is too short for its
/// window or the computation hit a numerical edge case.
#[derive(Debug, Clone)]
pub struct IndicatorSet {
    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub ema_12: Option<f64>,
    pub ema_26: Option<f64>,
    pub rsi_14: Option<f64>,
    pub macd: Option<MacdSnapshot>,
    pub atr_14: Option<f64>,
    /// ATR as percent of the latest close.
    pub atr_pct: Option<f64>,
    pub bollinger: Option<BollingerBands>,
    /// Latest volume / trailing 20-bar average volume.
    pub volume_ratio: Option<f64>,
    pub vwap: Option<f64>,
    /// Rolling low of closes over the support lookback window.
    pub support_low: Option<f64>,
    /// Max close over the trailing ~252 bars (or all available).
    pub high_52w: Option<f64>,
}

/// Compute the full indicator set for one series.
///
/// `support_lookback` is the rolling-low window for the support-bounce
/// reference (10–20 bars is typical).
///
/// # Errors
/// `ScreenError::InsufficientData` only when the series has no bars at all.
pub fn compute_indicators(
    series: &OhlcvSeries,
    support_lookback: usize,
) -> Result<IndicatorSet, ScreenError> {
    if series.is_empty() {
        return Err(ScreenError::InsufficientData {
            symbol: series.symbol().to_string(),
        });
    }

    let closes = series.closes();
    let volumes = series.volumes();
    let bars = series.bars();

    Ok(IndicatorSet {
        sma_20: calculate_sma(&closes, 20),
        sma_50: calculate_sma(&closes, 50),
        sma_200: calculate_sma(&closes, 200),
        ema_12: current_ema(&closes, 12),
        ema_26: current_ema(&closes, 26),
        rsi_14: current_rsi(&closes, 14),
        macd: standard_macd(&closes),
        atr_14: calculate_atr(bars, 14),
        atr_pct: calculate_atr_pct(bars, 14),
        bollinger: calculate_bollinger(&closes, 20, 2.0),
        volume_ratio: volume_ratio(&volumes, VOLUME_WINDOW),
        vwap: calculate_vwap(bars),
        support_low: rolling_low(&closes, support_lookback),
        high_52w: high_52w(&closes),
    })
}
