// =============================================================================
// Price Sources — Where a PriceSeries comes from
// =============================================================================
//
// `JsonFileSource` reads one file per instrument; bars with a null close are
// dropped before validation.
// =============================================================================

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

use super::instrument::Instrument;
use super::series::{Bar, PriceSeries};

// ---------------------------------------------------------------------------
// PriceSource contract
// ---------------------------------------------------------------------------

/// A price series together with the currency it is quoted in.
#[derive(Debug, Clone)]
pub struct FetchedSeries {
    pub series: PriceSeries,
    pub currency: String,
}

/// Anything that can supply daily bars for an instrument.
///
/// Implementations must return bars oldest-to-newest with null closes already
/// removed.  `Send + Sync` so one source can serve concurrent analyses.
pub trait PriceSource: Send + Sync {
    fn fetch(&self, instrument: &Instrument) -> Result<FetchedSeries>;
}

// ---------------------------------------------------------------------------
// JsonFileSource -- `<dir>/<provider_symbol>.json`
// ---------------------------------------------------------------------------

/// One bar as stored on disk.  `close` may be null for holidays or halted
/// sessions; such bars are dropped.
#[derive(Debug, Deserialize)]
struct RawBar {
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default)]
    open: Option<f64>,
    #[serde(default)]
    high: Option<f64>,
    #[serde(default)]
    low: Option<f64>,
    #[serde(default)]
    close: Option<f64>,
    #[serde(default)]
    volume: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SeriesFile {
    #[serde(default)]
    currency: Option<String>,
    bars: Vec<RawBar>,
}

/// Reads series from JSON files in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, instrument: &Instrument) -> PathBuf {
        self.dir.join(format!("{}.json", instrument.provider_symbol()))
    }
}

impl PriceSource for JsonFileSource {
    fn fetch(&self, instrument: &Instrument) -> Result<FetchedSeries> {
        let path = self.path_for(instrument);
        let file = read_series_file(&path)?;

        let total = file.bars.len();
        let bars: Vec<Bar> = file
            .bars
            .into_iter()
            .filter_map(|raw| {
                Some(Bar {
                    date: raw.date,
                    open: raw.open,
                    high: raw.high,
                    low: raw.low,
                    close: raw.close?,
                    volume: raw.volume,
                })
            })
            .collect();

        if bars.len() < total {
            debug!(
                instrument = %instrument,
                dropped = total - bars.len(),
                "dropped bars without a close"
            );
        }

        let series = PriceSeries::new(bars)
            .with_context(|| format!("invalid price series in {}", path.display()))?;

        info!(instrument = %instrument, bars = series.len(), path = %path.display(), "series loaded");

        Ok(FetchedSeries {
            series,
            currency: file
                .currency
                .unwrap_or_else(|| instrument.currency().to_string()),
        })
    }
}

fn read_series_file(path: &Path) -> Result<SeriesFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read series from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse series from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("market-pulse-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn loads_and_drops_null_closes() {
        let dir = scratch_dir("source-nulls");
        let json = r#"{
            "bars": [
                { "date": "2026-03-02", "close": 10.0, "high": 10.5, "low": 9.5, "volume": 100 },
                { "date": "2026-03-03", "close": null },
                { "date": "2026-03-04", "close": 11.0 }
            ]
        }"#;
        std::fs::write(dir.join("2330.TW.json"), json).unwrap();

        let source = JsonFileSource::new(&dir);
        let inst = Instrument::classify("2330").unwrap();
        let fetched = source.fetch(&inst).unwrap();

        assert_eq!(fetched.series.closes(), &[10.0, 11.0]);
        assert_eq!(fetched.currency, "TWD");
        assert_eq!(fetched.series.bars()[0].volume, Some(100.0));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn file_currency_overrides_default() {
        let dir = scratch_dir("source-currency");
        std::fs::write(
            dir.join("bitcoin.json"),
            r#"{ "currency": "EUR", "bars": [ { "close": 50000.0 } ] }"#,
        )
        .unwrap();

        let source = JsonFileSource::new(&dir);
        let fetched = source
            .fetch(&Instrument::Crypto { id: "bitcoin".into() })
            .unwrap();
        assert_eq!(fetched.currency, "EUR");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        let source = JsonFileSource::new(scratch_dir("source-missing"));
        let err = source
            .fetch(&Instrument::classify("NOPE").unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("failed to read series"));
    }

    #[test]
    fn invalid_prices_are_rejected() {
        let dir = scratch_dir("source-invalid");
        std::fs::write(
            dir.join("MSFT.json"),
            r#"{ "bars": [ { "close": 10.0 }, { "close": -2.0 } ] }"#,
        )
        .unwrap();

        let err = JsonFileSource::new(&dir)
            .fetch(&Instrument::classify("msft").unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("invalid price series"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
