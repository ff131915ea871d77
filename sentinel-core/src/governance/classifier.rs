//! Governance classifier — trigger predicates and the decision cascade.
//!
//! The cascade is a priority list, not a max-of-scores: branches are
//! evaluated top to bottom and the first match wins. Reordering the
//! branches changes outcomes and is a behavioral regression.

use super::metrics::{DerivedMetrics, MetricsError};
use crate::config::{Lookbacks, SignalConfig, SymbolMap, Thresholds};
use crate::domain::{GovernanceLevel, GovernanceState, MarketSnapshot, ReasonCode};

/// Boolean trigger set for one evaluation date.
///
/// Every predicate defaults to `false` where an input is undefined, so
/// missing data never manufactures a false alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triggers {
    /// Credit ratio falling or currency index spiking.
    pub stress: bool,
    /// Volatility index above the panic level.
    pub vol: bool,
    /// Breadth ratio narrowing.
    pub breadth: bool,
    /// Volatility index above the extreme override level.
    pub extreme_vol: bool,
}

impl Triggers {
    fn at(metrics: &DerivedMetrics, i: usize, thresholds: &Thresholds) -> Self {
        let below = |v: Option<f64>, limit: f64| v.map(|x| x < limit).unwrap_or(false);
        let above = |v: Option<f64>, limit: f64| v.map(|x| x > limit).unwrap_or(false);

        Self {
            stress: below(metrics.credit_delta.value(i), thresholds.credit_delta)
                || above(metrics.currency_delta.value(i), thresholds.currency_delta),
            vol: above(metrics.vix.value(i), thresholds.vol_level),
            breadth: below(metrics.breadth_delta.value(i), thresholds.breadth_delta),
            extreme_vol: above(metrics.vix.value(i), thresholds.extreme_vol_level),
        }
    }
}

/// The ordered cascade. First match wins; order is load-bearing.
fn decide(t: Triggers) -> (GovernanceLevel, ReasonCode) {
    if t.stress && t.vol {
        return (GovernanceLevel::Emergency, ReasonCode::StructuralFailure);
    }
    if t.extreme_vol {
        return (GovernanceLevel::Emergency, ReasonCode::ExtremeVolatility);
    }
    if t.stress {
        return (GovernanceLevel::Caution, ReasonCode::CreditCurrencyStress);
    }
    if t.vol {
        return (GovernanceLevel::Caution, ReasonCode::ElevatedVolatility);
    }
    if t.breadth {
        return (GovernanceLevel::Watchlist, ReasonCode::BreadthNarrowing);
    }
    (GovernanceLevel::Normal, ReasonCode::Nominal)
}

fn unavailable_reason(error: &MetricsError) -> ReasonCode {
    match error {
        MetricsError::MissingSymbol(_) => ReasonCode::MissingSymbol,
        MetricsError::NoDefinedSamples(_) | MetricsError::EmptyDomain => {
            ReasonCode::InsufficientHistory
        }
    }
}

#[derive(Debug, Clone)]
pub struct Classifier {
    thresholds: Thresholds,
    lookbacks: Lookbacks,
    symbols: SymbolMap,
}

impl Classifier {
    pub fn new(config: &SignalConfig) -> Self {
        Self {
            thresholds: config.thresholds.clone(),
            lookbacks: config.lookbacks.clone(),
            symbols: config.symbols.clone(),
        }
    }

    /// Classify the latest date in the snapshot's domain.
    ///
    /// Fail-safe: a missing required symbol, an empty domain, or a required
    /// series with zero defined samples yields `DataUnavailable` — never a
    /// silently safe `Normal`.
    pub fn classify_latest(&self, snapshot: &MarketSnapshot) -> GovernanceState {
        match DerivedMetrics::compute(snapshot, &self.symbols, &self.lookbacks) {
            Err(error) => GovernanceState::unavailable(None, unavailable_reason(&error)),
            Ok(metrics) => {
                let last = metrics.len() - 1;
                self.classify_row(&metrics, last)
            }
        }
    }

    /// Classify every date in the snapshot's domain (backtest mode).
    ///
    /// On unavailable data the history collapses to a single
    /// `DataUnavailable` entry, mirroring `classify_latest`.
    pub fn classify_history(&self, snapshot: &MarketSnapshot) -> Vec<GovernanceState> {
        match DerivedMetrics::compute(snapshot, &self.symbols, &self.lookbacks) {
            Err(error) => vec![GovernanceState::unavailable(None, unavailable_reason(&error))],
            Ok(metrics) => (0..metrics.len())
                .map(|i| self.classify_row(&metrics, i))
                .collect(),
        }
    }

    fn classify_row(&self, metrics: &DerivedMetrics, i: usize) -> GovernanceState {
        let triggers = Triggers::at(metrics, i, &self.thresholds);
        let (level, reason) = decide(triggers);
        let date = metrics
            .date(i)
            .expect("row index within metrics domain");
        GovernanceState::new(date, level, reason)
    }
}
