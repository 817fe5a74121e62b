// =============================================================================
// Screening run — fetch, compute, score, filter, rank
// =============================================================================
//
// Each symbol's pipeline (fetch series → compute indicators → score) is a
// pure unit with no shared mutable state, so the run fans symbols out onto
// blocking tasks and joins them.  A failing symbol is logged and skipped;
// it never aborts the run or affects other symbols.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::indicators::compute_indicators;
use crate::patterns::{score, PatternScoreRecord};
use crate::provider::SeriesProvider;
use crate::types::PatternType;

/// Parameters for one screening run.
#[derive(Debug, Clone)]
pub struct ScreenRequest {
    pub symbols: Vec<String>,
    pub pattern_type: PatternType,
    /// Minimum score (0-100) a record must reach under `pattern_type`.
    pub min_score: f64,
    /// Rolling-low window for the support-bounce reference.
    pub support_lookback: usize,
}

/// Evaluate one symbol end to end.  Pure apart from the provider fetch.
fn evaluate_symbol(
    provider: &dyn SeriesProvider,
    symbol: &str,
    support_lookback: usize,
) -> anyhow::Result<PatternScoreRecord> {
    let series = provider.fetch_series(symbol)?;
    let indicators = compute_indicators(&series, support_lookback)?;
    let record = score(&series, &indicators)?;
    Ok(record)
}

/// Which of a record's scores the `pattern_type` filter compares.
fn selected_score(record: &PatternScoreRecord, pattern_type: PatternType) -> f64 {
    match pattern_type {
        PatternType::Reversal => record.reversal_score,
        PatternType::Breakout => record.breakout_score,
        PatternType::Both => record.composite_score,
    }
}

/// Run the screen over the requested symbol universe.
///
/// Returns the records that meet `min_score` under the selected pattern
/// type, sorted by composite score descending with ties broken by symbol
/// name ascending.
pub async fn run_screen(
    provider: Arc<dyn SeriesProvider>,
    request: &ScreenRequest,
) -> Vec<PatternScoreRecord> {
    let tasks: Vec<_> = request
        .symbols
        .iter()
        .map(|symbol| {
            let provider = provider.clone();
            let symbol = symbol.clone();
            let lookback = request.support_lookback;
            tokio::task::spawn_blocking(move || {
                let result = evaluate_symbol(provider.as_ref(), &symbol, lookback);
                (symbol, result)
            })
        })
        .collect();

    let mut records = Vec::with_capacity(request.symbols.len());
    for joined in join_all(tasks).await {
        match joined {
            Ok((symbol, Ok(record))) => {
                debug!(
                    symbol = %symbol,
                    reversal = record.reversal_score,
                    breakout = record.breakout_score,
                    composite = record.composite_score,
                    "symbol scored"
                );
                records.push(record);
            }
            Ok((symbol, Err(e))) => {
                warn!(symbol = %symbol, error = %e, "symbol skipped");
            }
            Err(e) => {
                warn!(error = %e, "scoring task failed to join");
            }
        }
    }

    records.retain(|r| selected_score(r, request.pattern_type) >= request.min_score);

    records.sort_by(|a, b| {
        b.composite_score
            .total_cmp(&a.composite_score)
            .then_with(|| a.symbol.cmp(&b.symbol))
    });

    records
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::{Bar, OhlcvSeries};
    use anyhow::anyhow;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;

    /// In-memory provider keyed by symbol; unknown symbols error.
    struct MapProvider {
        series: HashMap<String, Vec<Bar>>,
    }

    impl SeriesProvider for MapProvider {
        fn fetch_series(&self, symbol: &str) -> anyhow::Result<OhlcvSeries> {
            let bars = self
                .series
                .get(symbol)
                .cloned()
                .ok_or_else(|| anyhow!("no data for {symbol}"))?;
            Ok(OhlcvSeries::new(symbol, bars)?)
        }
    }

    fn bars(closes: &[f64]) -> Vec<Bar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Bar {
                timestamp: Utc.timestamp_opt(i as i64 * 86_400, 0).unwrap(),
                open: c,
                high: c + 0.5,
                low: c - 0.5,
                close: c,
                volume: 1000.0,
            })
            .collect()
    }

    fn request(symbols: &[&str], pattern_type: PatternType, min_score: f64) -> ScreenRequest {
        ScreenRequest {
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
            pattern_type,
            min_score,
            support_lookback: 20,
        }
    }

    fn rally() -> Vec<Bar> {
        // Accelerating advance so trend-following signals (MACD included)
        // fire on real margins, not float residue around zero.
        let closes: Vec<f64> = (0..80).map(|i| 100.0 + 0.02 * (i * i) as f64).collect();
        bars(&closes)
    }

    #[tokio::test]
    async fn failed_symbols_are_isolated() {
        let mut series = HashMap::new();
        series.insert("GOOD".to_string(), rally());
        series.insert("EMPTY".to_string(), vec![]); // InsufficientData inside the engine
        let provider = Arc::new(MapProvider { series });

        let results = run_screen(
            provider,
            &request(&["GOOD", "EMPTY", "MISSING"], PatternType::Both, 0.0),
        )
        .await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].symbol, "GOOD");
    }

    #[tokio::test]
    async fn min_score_filters_under_selected_pattern() {
        let mut series = HashMap::new();
        series.insert("UP".to_string(), rally());
        let provider = Arc::new(MapProvider { series });

        // A rally scores on breakout signals, not reversal ones.
        let results = run_screen(provider.clone(), &request(&["UP"], PatternType::Breakout, 30.0)).await;
        assert_eq!(results.len(), 1);

        let results = run_screen(provider, &request(&["UP"], PatternType::Reversal, 30.0)).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn equal_composites_order_by_symbol_ascending() {
        // Identical series => identical scores; the tie-break is the name.
        let mut series = HashMap::new();
        series.insert("ZETA".to_string(), rally());
        series.insert("ALPHA".to_string(), rally());
        series.insert("MID".to_string(), rally());
        let provider = Arc::new(MapProvider { series });

        let results = run_screen(
            provider,
            &request(&["ZETA", "ALPHA", "MID"], PatternType::Both, 0.0),
        )
        .await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].symbol, "ALPHA");
        assert_eq!(results[1].symbol, "MID");
        assert_eq!(results[2].symbol, "ZETA");
        assert_eq!(results[0].composite_score, results[1].composite_score);
    }

    #[tokio::test]
    async fn results_sorted_by_composite_descending() {
        let mut series = HashMap::new();
        // Rally plus a volume pop on the last bar: four breakout signals.
        let mut hot = rally();
        hot.last_mut().unwrap().volume = 3000.0;
        series.insert("HOT".to_string(), hot);
        // An accelerating slide scores one share per family at most.
        let cold: Vec<f64> = (0..80).map(|i| 200.0 - 0.01 * (i * i) as f64).collect();
        series.insert("COLD".to_string(), bars(&cold));
        let provider = Arc::new(MapProvider { series });

        let results = run_screen(provider, &request(&["COLD", "HOT"], PatternType::Both, 0.0)).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].symbol, "HOT");
        assert!(results[0].composite_score > results[1].composite_score);
    }
}
