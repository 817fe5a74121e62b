// =============================================================================
// Screener configuration — JSON file with serde defaults + env overrides
// =============================================================================
//
// All fields carry `#[serde(default)]` so that adding new fields never
// breaks loading an older config file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::PatternType;

fn default_symbols() -> Vec<String> {
    vec![
        "AAPL".to_string(),
        "MSFT".to_string(),
        "NVDA".to_string(),
        "AMZN".to_string(),
        "GOOGL".to_string(),
    ]
}

fn default_min_score() -> f64 {
    50.0
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_max_results() -> usize {
    10
}

fn default_support_lookback() -> usize {
    20
}

/// Top-level configuration for a screening run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerConfig {
    /// Symbol universe to screen.
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,

    /// Which pattern family the minimum-score filter applies to.
    #[serde(default)]
    pub pattern_type: PatternType,

    /// Minimum score (0-100) a symbol must reach to appear in results.
    #[serde(default = "default_min_score")]
    pub min_score: f64,

    /// Directory holding per-symbol JSON series fixtures.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Maximum rows printed in the result table.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Rolling-low window for the support-bounce reference (10-20 typical).
    #[serde(default = "default_support_lookback")]
    pub support_lookback: usize,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
            pattern_type: PatternType::default(),
            min_score: default_min_score(),
            data_dir: default_data_dir(),
            max_results: default_max_results(),
            support_lookback: default_support_lookback(),
        }
    }
}

impl ScreenerConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read screener config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse screener config from {}", path.display()))?;

        info!(
            path = %path.display(),
            symbols = ?config.symbols,
            pattern_type = %config.pattern_type,
            min_score = config.min_score,
            "screener config loaded"
        );

        Ok(config)
    }

    /// Apply `SCREENER_*` environment overrides on top of the loaded file.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(syms) = std::env::var("SCREENER_SYMBOLS") {
            let parsed: Vec<String> = syms
                .split(',')
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect();
            if !parsed.is_empty() {
                self.symbols = parsed;
            }
        }

        if let Ok(raw) = std::env::var("SCREENER_MIN_SCORE") {
            if let Ok(min_score) = raw.trim().parse::<f64>() {
                self.min_score = min_score.clamp(0.0, 100.0);
            }
        }

        if let Ok(raw) = std::env::var("SCREENER_PATTERN") {
            if let Ok(pattern_type) = raw.parse::<PatternType>() {
                self.pattern_type = pattern_type;
            }
        }
    }
}
