//! Text rendering of engine results.
//!
//! Display mapping only — levels, reasons, and colors come straight off the
//! result object; no classification logic is re-derived here.

use sentinel_core::domain::{GovernanceLevel, GovernanceState};
use sentinel_core::engine::SignalEngineResult;

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.4}"),
        None => "-".to_string(),
    }
}

/// Print the live status block for one benchmark.
pub fn print_status(benchmark: &str, result: &SignalEngineResult) {
    let state = &result.governance;
    println!("── governance ──────────────────────────────");
    match state.date {
        Some(date) => println!("  {date}  {}  ({})", state.level, state.reason.message()),
        None => println!("  {}  ({})", state.level, state.reason.message()),
    }
    println!("  color: {}", state.level.color());

    println!("── oscillator [{benchmark}] ────────────────");
    let last = result.oscillator.line.len().saturating_sub(1);
    println!("  line:      {}", fmt_opt(result.oscillator.line.value(last)));
    println!("  signal:    {}", fmt_opt(result.oscillator.signal.value(last)));
    println!("  histogram: {}", fmt_opt(result.oscillator.histogram.value(last)));

    println!("── volatility band [{benchmark}] ───────────");
    println!("  center:     {}", fmt_opt(result.bands.center.value(last)));
    println!("  dispersion: {}", fmt_opt(result.bands.dispersion.value(last)));
    println!(
        "  band:       [{}, {}]",
        fmt_opt(result.bands.lower.value(last)),
        fmt_opt(result.bands.upper.value(last))
    );

    println!("── forecast ────────────────────────────────");
    if result.forecast.is_empty() {
        println!("  (no anchor — insufficient history)");
    } else {
        let end = result.forecast.len() - 1;
        let end_date = result.forecast.mean.date(end).expect("non-empty forecast");
        println!(
            "  {}d cone to {end_date}: mean {} in [{}, {}]",
            result.forecast.len(),
            fmt_opt(result.forecast.mean.value(end)),
            fmt_opt(result.forecast.lower.value(end)),
            fmt_opt(result.forecast.upper.value(end)),
        );
    }
    println!("  config: {}", &result.config_id[..16]);
}

/// Print governance transitions and per-level day counts.
pub fn print_backtest(history: &[GovernanceState]) {
    println!("── governance history ──────────────────────");
    let mut previous: Option<GovernanceLevel> = None;
    for state in history {
        if previous != Some(state.level) {
            match state.date {
                Some(date) => {
                    println!("  {date}  → {}  ({})", state.level, state.reason.message())
                }
                None => println!("  → {}  ({})", state.level, state.reason.message()),
            }
            previous = Some(state.level);
        }
    }

    println!("── day counts ──────────────────────────────");
    let levels = [
        GovernanceLevel::Normal,
        GovernanceLevel::Watchlist,
        GovernanceLevel::Caution,
        GovernanceLevel::Emergency,
        GovernanceLevel::DataUnavailable,
    ];
    for level in levels {
        let count = history.iter().filter(|s| s.level == level).count();
        if count > 0 {
            println!("  {level}: {count}");
        }
    }
}
