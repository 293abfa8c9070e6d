// =============================================================================
// Market Pulse — Command-line driver
// =============================================================================
//
//   market-pulse 2330 AAPL btc
//
// Classifies each query, loads its series from `MARKET_PULSE_DATA_DIR`
// (default `data/`), analyses every instrument concurrently on the blocking
// pool and prints one JSON report per instrument on stdout.
// =============================================================================

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tokio::task::JoinSet;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use market_pulse::market_data::{JsonFileSource, PriceSource};
use market_pulse::report::AnalysisReport;
use market_pulse::{Analyzer, AnalyzerConfig, Instrument};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Environment & logging ─────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // ── 2. Config ────────────────────────────────────────────────────────
    let config_path =
        std::env::var("MARKET_PULSE_CONFIG").unwrap_or_else(|_| "analyzer_config.json".into());
    let config = AnalyzerConfig::load(&config_path).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AnalyzerConfig::default()
    });
    let analyzer = Arc::new(Analyzer::new(config).context("analyzer config is invalid")?);

    // ── 3. Instruments ───────────────────────────────────────────────────
    let mut queries: Vec<String> = std::env::args().skip(1).collect();
    if queries.is_empty() {
        if let Ok(syms) = std::env::var("MARKET_PULSE_SYMBOLS") {
            queries = syms.split(',').map(|s| s.to_string()).collect();
        }
    }
    let instruments: Vec<Instrument> = queries
        .iter()
        .filter_map(|q| Instrument::classify(q))
        .collect();
    if instruments.is_empty() {
        bail!("usage: market-pulse <symbol>... (or set MARKET_PULSE_SYMBOLS)");
    }

    let data_dir = std::env::var("MARKET_PULSE_DATA_DIR").unwrap_or_else(|_| "data".into());
    let source: Arc<dyn PriceSource> = Arc::new(JsonFileSource::new(&data_dir));

    info!(
        instruments = instruments.len(),
        data_dir = %data_dir,
        required_bars = analyzer.config().required_bars(),
        "Starting analysis"
    );

    // ── 4. Fetch + analyse concurrently ──────────────────────────────────
    let mut tasks = JoinSet::new();
    for instrument in instruments {
        let analyzer = analyzer.clone();
        let source = source.clone();
        tasks.spawn_blocking(move || {
            let outcome = run_one(&analyzer, source.as_ref(), &instrument);
            (instrument, outcome)
        });
    }

    // ── 5. Report ────────────────────────────────────────────────────────
    let mut failures = 0usize;
    while let Some(joined) = tasks.join_next().await {
        let (instrument, outcome) = joined.context("analysis task panicked")?;
        match outcome {
            Ok(report) => {
                info!(id = %report.id, "{}", report.summary());
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Err(e) => {
                failures += 1;
                error!(instrument = %instrument, error = ?e, "Analysis failed");
            }
        }
    }

    if failures > 0 {
        bail!("{failures} instrument(s) failed");
    }
    Ok(())
}

fn run_one(
    analyzer: &Analyzer,
    source: &dyn PriceSource,
    instrument: &Instrument,
) -> Result<AnalysisReport> {
    let fetched = source.fetch(instrument)?;
    let result = analyzer
        .analyze(&fetched.series)
        .with_context(|| format!("failed to analyse {instrument}"))?;
    Ok(AnalysisReport::new(instrument.clone(), &fetched, result))
}
