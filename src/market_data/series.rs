// =============================================================================
// OHLCV series — the engine's only input
// =============================================================================
//
// A series is an ordered run of daily (or intraday) bars for one symbol.
// Construction enforces the time-ordering invariant: strictly increasing
// timestamps, no duplicates.  Everything downstream may assume it holds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ScreenError;

/// One price/volume bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// Typical price, the per-bar price used for VWAP.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

/// A validated, time-ordered OHLCV series for one symbol.
#[derive(Debug, Clone)]
pub struct OhlcvSeries {
    symbol: String,
    bars: Vec<Bar>,
}

impl OhlcvSeries {
    /// Build a series after checking the ordering invariant.
    ///
    /// An empty bar list is accepted here; it fails later, in
    /// `compute_indicators`, so the caller gets the engine's
    /// `InsufficientData` error rather than a constructor error.
    pub fn new(symbol: impl Into<String>, bars: Vec<Bar>) -> Result<Self, ScreenError> {
        let symbol = symbol.into();

        for (index, pair) in bars.windows(2).enumerate() {
            let index = index + 1;
            if pair[1].timestamp == pair[0].timestamp {
                return Err(ScreenError::DuplicateTimestamp { symbol, index });
            }
            if pair[1].timestamp < pair[0].timestamp {
                return Err(ScreenError::NonMonotonicTimestamps { symbol, index });
            }
        }

        Ok(Self { symbol, bars })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Closing prices, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Volumes, oldest first.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    pub fn last_bar(&self) -> Option<&Bar> {
        self.bars.last()
    }
}
