//! CSV snapshot loading.
//!
//! One file per ticker, `<dir>/<ticker>.csv`, with `date,close` rows. An
//! empty close field is an undefined sample; a missing row is simply an
//! absent date (alignment inserts the gap later). The loader never
//! forward-fills — gap policy belongs to whoever produced the files.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use sentinel_core::config::SymbolMap;
use sentinel_core::domain::{MarketSnapshot, TimeSeries};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Row {
    date: NaiveDate,
    close: Option<f64>,
}

/// Load one series from a `date,close` CSV file.
pub fn load_series(path: &Path) -> Result<TimeSeries> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut dates = Vec::new();
    let mut values = Vec::new();
    for record in reader.deserialize() {
        let row: Row = record.with_context(|| format!("parsing {}", path.display()))?;
        dates.push(row.date);
        values.push(row.close);
    }

    TimeSeries::new(dates, values)
        .with_context(|| format!("building series from {}", path.display()))
}

/// Load every configured ticker from `dir` into a snapshot.
///
/// A missing file is a warning, not an error: the classifier's fail-safe
/// (`DATA_UNAVAILABLE`) is the correct downstream answer for an absent
/// required symbol, and a missing benchmark is the engine's call to make.
pub fn load_snapshot(dir: &Path, symbols: &SymbolMap) -> Result<MarketSnapshot> {
    let mut snapshot = MarketSnapshot::new();
    for ticker in symbols.all() {
        let path = dir.join(format!("{ticker}.csv"));
        if !path.exists() {
            eprintln!("warning: no data file for {ticker} ({})", path.display());
            continue;
        }
        let series = load_series(&path)?;
        snapshot.insert(ticker.to_string(), series);
    }
    Ok(snapshot)
}
