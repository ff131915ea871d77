//! End-to-end scenarios for the signal engine.
//!
//! Each scenario builds a synthetic six-symbol snapshot, runs the full
//! engine, and checks the classification contract:
//! 1. Flat basket → NORMAL
//! 2. Credit drop + vol spike on the same day → EMERGENCY (structural)
//! 3. Cascade precedence: stress + breadth without vol → CAUTION
//! 4. Missing volatility symbol → DATA_UNAVAILABLE (fail-safe)
//! 5. Forecast anchor arithmetic at horizon 1

use chrono::NaiveDate;
use sentinel_core::config::{SignalConfig, SymbolMap};
use sentinel_core::domain::{GovernanceLevel, MarketSnapshot, ReasonCode, TimeSeries};
use sentinel_core::engine::SignalEngine;
use sentinel_core::forecast::ForecastProjector;

fn daily(n: usize, f: impl Fn(usize) -> f64) -> TimeSeries {
    let base = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    TimeSeries::from_pairs(
        (0..n)
            .map(|i| (base + chrono::Duration::days(i as i64), f(i)))
            .collect(),
    )
    .unwrap()
}

/// 100 days, everything flat.
fn flat_snapshot(n: usize) -> MarketSnapshot {
    let symbols = SymbolMap::default();
    let mut snap = MarketSnapshot::new();
    snap.insert(symbols.risky_credit.clone(), daily(n, |_| 75.0));
    snap.insert(symbols.safe_duration.clone(), daily(n, |_| 95.0));
    snap.insert(symbols.volatility.clone(), daily(n, |_| 15.0));
    snap.insert(symbols.equal_weight.clone(), daily(n, |_| 160.0));
    snap.insert(symbols.cap_weight.clone(), daily(n, |_| 450.0));
    snap.insert(symbols.currency.clone(), daily(n, |_| 104.0));
    snap
}

fn engine() -> SignalEngine {
    SignalEngine::new(SignalConfig::default()).unwrap()
}

#[test]
fn flat_basket_is_normal() {
    let result = engine().evaluate(&flat_snapshot(100)).unwrap();
    assert_eq!(result.governance.level, GovernanceLevel::Normal);
    assert_eq!(result.governance.reason, ReasonCode::Nominal);
}

#[test]
fn credit_drop_plus_vol_spike_is_structural_emergency() {
    let mut snap = flat_snapshot(100);
    let symbols = SymbolMap::default();

    // Risky credit bleeds 3% over the last 10 observations
    snap.insert(
        symbols.risky_credit.clone(),
        daily(100, |i| {
            if i < 90 {
                75.0
            } else {
                75.0 * (1.0 - 0.03 * (i - 89) as f64 / 10.0)
            }
        }),
    );
    // Volatility index closes above the panic level on the final day
    snap.insert(
        symbols.volatility.clone(),
        daily(100, |i| if i == 99 { 26.0 } else { 15.0 }),
    );

    let result = engine().evaluate(&snap).unwrap();
    assert_eq!(result.governance.level, GovernanceLevel::Emergency);
    assert_eq!(result.governance.reason, ReasonCode::StructuralFailure);
    assert_eq!(
        result.governance.reason.message(),
        "structural failure confirmed"
    );
}

#[test]
fn stress_and_breadth_without_vol_is_caution_not_watchlist() {
    let mut snap = flat_snapshot(100);
    let symbols = SymbolMap::default();

    // Stress: credit ratio down 3% over 10 observations
    snap.insert(
        symbols.risky_credit.clone(),
        daily(100, |i| {
            if i < 90 {
                75.0
            } else {
                75.0 * (1.0 - 0.03 * (i - 89) as f64 / 10.0)
            }
        }),
    );
    // Breadth: equal-weight proxy down 4% over 20 observations
    snap.insert(
        symbols.equal_weight.clone(),
        daily(100, |i| {
            if i < 80 {
                160.0
            } else {
                160.0 * (1.0 - 0.04 * (i - 79) as f64 / 20.0)
            }
        }),
    );
    // Vol stays quiet: the stress branch must fire before breadth is
    // ever consulted.
    let result = engine().evaluate(&snap).unwrap();
    assert_eq!(result.governance.level, GovernanceLevel::Caution);
    assert_eq!(result.governance.reason, ReasonCode::CreditCurrencyStress);
}

#[test]
fn currency_spike_alone_is_caution() {
    let mut snap = flat_snapshot(100);
    let symbols = SymbolMap::default();

    // Currency index jumps 3% over the last 5 observations
    snap.insert(
        symbols.currency.clone(),
        daily(100, |i| {
            if i < 95 {
                104.0
            } else {
                104.0 * (1.0 + 0.03 * (i - 94) as f64 / 5.0)
            }
        }),
    );

    let result = engine().evaluate(&snap).unwrap();
    assert_eq!(result.governance.level, GovernanceLevel::Caution);
    assert_eq!(result.governance.reason, ReasonCode::CreditCurrencyStress);
}

#[test]
fn extreme_vol_alone_is_emergency() {
    let mut snap = flat_snapshot(100);
    let symbols = SymbolMap::default();
    snap.insert(
        symbols.volatility.clone(),
        daily(100, |i| if i == 99 { 32.0 } else { 15.0 }),
    );

    let result = engine().evaluate(&snap).unwrap();
    assert_eq!(result.governance.level, GovernanceLevel::Emergency);
    assert_eq!(result.governance.reason, ReasonCode::ExtremeVolatility);
}

#[test]
fn missing_volatility_symbol_is_data_unavailable_never_normal() {
    let symbols = SymbolMap::default();
    let full = flat_snapshot(100);
    let mut snap = MarketSnapshot::new();
    for sym in full.symbols() {
        if sym != symbols.volatility {
            snap.insert(sym.to_string(), full.get(sym).unwrap().clone());
        }
    }

    let result = engine().evaluate(&snap).unwrap();
    assert_eq!(result.governance.level, GovernanceLevel::DataUnavailable);
    assert_eq!(result.governance.reason, ReasonCode::MissingSymbol);
}

#[test]
fn backtest_history_tracks_spike_day_only() {
    let mut snap = flat_snapshot(100);
    let symbols = SymbolMap::default();
    snap.insert(
        symbols.volatility.clone(),
        daily(100, |i| if i == 50 { 26.0 } else { 15.0 }),
    );

    let result = engine().backtest(&snap).unwrap();
    let history = result.history.unwrap();
    assert_eq!(history.len(), 100);
    assert_eq!(history[50].level, GovernanceLevel::Caution);
    assert_eq!(history[50].reason, ReasonCode::ElevatedVolatility);
    assert_eq!(history[49].level, GovernanceLevel::Normal);
    assert_eq!(history[51].level, GovernanceLevel::Normal);
    // latest-date read matches the last history row
    assert_eq!(result.governance, history[99]);
}

#[test]
fn forecast_anchor_arithmetic_at_horizon_one() {
    let anchor = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
    let band = ForecastProjector::new(1, 0.0003, 1.28).project(anchor, 100.0, 2.0);

    assert_eq!(band.len(), 1);
    let mean = band.mean.value(0).unwrap();
    let upper = band.upper.value(0).unwrap();
    let lower = band.lower.value(0).unwrap();
    assert!((mean - 100.03).abs() < 1e-9);
    // width = 1.28*2 + 2*0.1*sqrt(1) = 2.76
    assert!((upper - mean - 2.76).abs() < 1e-9);
    assert!((mean - lower - 2.76).abs() < 1e-9);
}

#[test]
fn result_serializes_for_renderers() {
    let result = engine().backtest(&flat_snapshot(60)).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"NORMAL\""));
    assert!(json.contains("config_id"));
}
