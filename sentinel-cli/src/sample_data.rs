//! Synthetic sample data for demos and smoke runs.
//!
//! Produces a seeded random-walk CSV set for every configured symbol so the
//! engine can be exercised without any market data on hand. Walk parameters
//! are per-role: credit and duration proxies drift slowly, the volatility
//! index mean-reverts around its long-run level.

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sentinel_core::config::SymbolMap;
use std::io::Write;
use std::path::Path;

/// Walk parameters for one generated series.
struct WalkSpec {
    ticker: String,
    start: f64,
    daily_drift: f64,
    daily_vol: f64,
}

fn specs(symbols: &SymbolMap) -> Vec<WalkSpec> {
    let spec = |ticker: &str, start: f64, daily_drift: f64, daily_vol: f64| WalkSpec {
        ticker: ticker.to_string(),
        start,
        daily_drift,
        daily_vol,
    };
    let mut out = vec![
        spec(&symbols.risky_credit, 75.0, 0.0001, 0.004),
        spec(&symbols.safe_duration, 95.0, 0.00005, 0.003),
        spec(&symbols.equal_weight, 160.0, 0.0003, 0.009),
        spec(&symbols.cap_weight, 450.0, 0.0004, 0.010),
        spec(&symbols.currency, 104.0, 0.0, 0.003),
    ];
    if symbols.benchmark != symbols.cap_weight {
        out.push(spec(&symbols.benchmark, 300.0, 0.0004, 0.011));
    }
    out
}

/// Trading dates: `days` weekdays starting from `start`.
fn trading_dates(start: NaiveDate, days: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(days);
    let mut date = start;
    while dates.len() < days {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            dates.push(date);
        }
        date += Duration::days(1);
    }
    dates
}

/// Multiplicative random walk with uniform shocks.
fn random_walk(rng: &mut StdRng, spec: &WalkSpec, days: usize) -> Vec<f64> {
    let mut prices = Vec::with_capacity(days);
    let mut price = spec.start;
    for _ in 0..days {
        let shock = rng.gen_range(-1.0..1.0) * spec.daily_vol;
        price *= 1.0 + spec.daily_drift + shock;
        prices.push(price);
    }
    prices
}

/// Mean-reverting level series for the volatility index.
fn vol_index_walk(rng: &mut StdRng, days: usize) -> Vec<f64> {
    let long_run: f64 = 16.0;
    let mut levels = Vec::with_capacity(days);
    let mut level = long_run;
    for _ in 0..days {
        let shock = rng.gen_range(-1.0..1.0) * 1.2;
        level += 0.15 * (long_run - level) + shock;
        level = level.max(9.0);
        levels.push(level);
    }
    levels
}

fn write_csv(dir: &Path, ticker: &str, dates: &[NaiveDate], values: &[f64]) -> Result<()> {
    let path = dir.join(format!("{ticker}.csv"));
    let mut file = std::fs::File::create(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    writeln!(file, "date,close")?;
    for (date, value) in dates.iter().zip(values) {
        writeln!(file, "{date},{value:.4}")?;
    }
    Ok(())
}

/// Write the full sample CSV set into `dir`.
pub fn write_sample_data(dir: &Path, days: usize, seed: u64, symbols: &SymbolMap) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating {}", dir.display()))?;

    let start = NaiveDate::from_ymd_opt(2020, 1, 2).expect("valid fixture start date");
    let dates = trading_dates(start, days);
    let mut rng = StdRng::seed_from_u64(seed);

    for spec in specs(symbols) {
        let prices = random_walk(&mut rng, &spec, days);
        write_csv(dir, &spec.ticker, &dates, &prices)?;
    }
    let vix = vol_index_walk(&mut rng, days);
    write_csv(dir, &symbols.volatility, &dates, &vix)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trading_dates_skip_weekends() {
        // 2020-01-02 is a Thursday
        let dates = trading_dates(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(), 5);
        assert_eq!(dates.len(), 5);
        assert!(dates
            .iter()
            .all(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)));
        // Thu, Fri, then Mon
        assert_eq!(dates[1], NaiveDate::from_ymd_opt(2020, 1, 3).unwrap());
        assert_eq!(dates[2], NaiveDate::from_ymd_opt(2020, 1, 6).unwrap());
    }

    #[test]
    fn walks_are_deterministic_per_seed() {
        let symbols = SymbolMap::default();
        let all = specs(&symbols);
        let a = random_walk(&mut StdRng::seed_from_u64(42), &all[0], 50);
        let b = random_walk(&mut StdRng::seed_from_u64(42), &all[0], 50);
        assert_eq!(a, b);
    }

    #[test]
    fn walks_stay_positive() {
        let symbols = SymbolMap::default();
        for spec in specs(&symbols) {
            let prices = random_walk(&mut StdRng::seed_from_u64(7), &spec, 2520);
            assert!(prices.iter().all(|p| *p > 0.0), "{} went non-positive", spec.ticker);
        }
    }

    #[test]
    fn vol_index_respects_floor() {
        let levels = vol_index_walk(&mut StdRng::seed_from_u64(7), 2520);
        assert!(levels.iter().all(|v| *v >= 9.0));
    }
}
