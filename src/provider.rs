// =============================================================================
// Series provider — the retrieval capability passed into a screening run
// =============================================================================
//
// The engine never fetches data itself.  A `SeriesProvider` is handed to the
// screening run, which keeps the core trivially testable with fixed fixtures
// and keeps any caching or rate-limiting on the provider's side of the line.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::market_data::{Bar, OhlcvSeries};

/// One method: materialize the OHLCV series for a symbol.
pub trait SeriesProvider: Send + Sync {
    fn fetch_series(&self, symbol: &str) -> Result<OhlcvSeries>;
}

/// Reads `{data_dir}/{SYMBOL}.json` — a JSON array of bars — and validates
/// the ordering invariant on the way in.
pub struct FixtureProvider {
    data_dir: PathBuf,
}

impl FixtureProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl SeriesProvider for FixtureProvider {
    fn fetch_series(&self, symbol: &str) -> Result<OhlcvSeries> {
        let path = self.data_dir.join(format!("{symbol}.json"));

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read series fixture {}", path.display()))?;

        let bars: Vec<Bar> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse series fixture {}", path.display()))?;

        let series = OhlcvSeries::new(symbol, bars)
            .with_context(|| format!("series fixture {} violates ordering", path.display()))?;

        Ok(series)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_fixture(dir: &std::path::Path, symbol: &str, body: &str) {
        std::fs::write(dir.join(format!("{symbol}.json")), body).unwrap();
    }

    #[test]
    fn fetches_and_validates_fixture() {
        let dir = tempdir().unwrap();
        write_fixture(
            dir.path(),
            "AAPL",
            r#"[
                {"timestamp":"2024-01-01T00:00:00Z","open":10.0,"high":11.0,"low":9.0,"close":10.5,"volume":1000.0},
                {"timestamp":"2024-01-02T00:00:00Z","open":10.5,"high":12.0,"low":10.0,"close":11.5,"volume":1200.0}
            ]"#,
        );

        let provider = FixtureProvider::new(dir.path());
        let series = provider.fetch_series("AAPL").unwrap();
        assert_eq!(series.symbol(), "AAPL");
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![10.5, 11.5]);
    }

    #[test]
    fn missing_fixture_is_an_error() {
        let dir = tempdir().unwrap();
        let provider = FixtureProvider::new(dir.path());
        assert!(provider.fetch_series("NOPE").is_err());
    }

    #[test]
    fn out_of_order_fixture_is_an_error() {
        let dir = tempdir().unwrap();
        write_fixture(
            dir.path(),
            "BAD",
            r#"[
                {"timestamp":"2024-01-05T00:00:00Z","open":10.0,"high":11.0,"low":9.0,"close":10.5,"volume":1000.0},
                {"timestamp":"2024-01-02T00:00:00Z","open":10.5,"high":12.0,"low":10.0,"close":11.5,"volume":1200.0}
            ]"#,
        );

        let provider = FixtureProvider::new(dir.path());
        let err = provider.fetch_series("BAD").unwrap_err();
        assert!(err.to_string().contains("ordering"));
    }
}
