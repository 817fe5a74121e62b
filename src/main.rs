// =============================================================================
// Setup Screener — Main Entry Point
// =============================================================================
//
// Loads the configuration, runs the reversal/breakout screen over the
// configured symbol universe, and prints a ranked plain-text table.

// ── Module declarations ──────────────────────────────────────────────────────
mod config;
mod errors;
mod indicators;
mod market_data;
mod patterns;
mod provider;
mod screener;
mod types;

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::ScreenerConfig;
use crate::patterns::PatternScoreRecord;
use crate::provider::FixtureProvider;
use crate::screener::{run_screen, ScreenRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = ScreenerConfig::load("screener_config.json").unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        ScreenerConfig::default()
    });
    config.apply_env_overrides();

    info!(
        symbols = ?config.symbols,
        pattern_type = %config.pattern_type,
        min_score = config.min_score,
        "Starting screening run"
    );

    // ── 2. Build the data provider ───────────────────────────────────────
    let provider = Arc::new(FixtureProvider::new(&config.data_dir));

    // ── 3. Run the screen ────────────────────────────────────────────────
    let request = ScreenRequest {
        symbols: config.symbols.clone(),
        pattern_type: config.pattern_type,
        min_score: config.min_score,
        support_lookback: config.support_lookback,
    };
    let results = run_screen(provider, &request).await;

    info!(
        screened = config.symbols.len(),
        matched = results.len(),
        "Screening run complete"
    );

    // ── 4. Present the ranked table ──────────────────────────────────────
    if results.is_empty() {
        println!("No symbols matched the criteria.");
        return Ok(());
    }

    print_table(&results, config.max_results);
    Ok(())
}

/// Fixed-width result table, best composite first.
fn print_table(results: &[PatternScoreRecord], max_results: usize) {
    println!(
        "{:<10} {:>9} {:>9} {:>10}  {:<14} {}",
        "Symbol", "Reversal", "Breakout", "Composite", "Recommendation", "Signals"
    );
    println!("{}", "-".repeat(88));

    for record in results.iter().take(max_results) {
        let signals: Vec<&str> = record
            .reversal_signals
            .iter()
            .map(|s| s.name())
            .chain(record.breakout_signals.iter().map(|s| s.name()))
            .collect();

        println!(
            "{:<10} {:>9.1} {:>9.1} {:>10.1}  {:<14} {}",
            record.symbol,
            record.reversal_score,
            record.breakout_score,
            record.composite_score,
            record.recommendation.to_string(),
            signals.join(", ")
        );
    }
}
