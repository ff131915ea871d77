//! Derived cross-asset metrics for the governance classifier.
//!
//! Computed once over the snapshot's full domain, then read row-wise by the
//! cascade — vectorized precompute for backtests, last-row read for live use.

use crate::config::{Lookbacks, SymbolMap};
use crate::domain::{MarketSnapshot, TimeSeries};
use chrono::NaiveDate;

/// Snapshot-wide metric columns on the union date domain.
#[derive(Debug, Clone)]
pub struct DerivedMetrics {
    /// Credit ratio (risky credit / safe duration) change over the credit
    /// lookback.
    pub credit_delta: TimeSeries,
    /// Breadth ratio (equal weight / cap weight) change over the breadth
    /// lookback.
    pub breadth_delta: TimeSeries,
    /// Currency index change over the currency lookback.
    pub currency_delta: TimeSeries,
    /// Volatility index level, used directly.
    pub vix: TimeSeries,
}

#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("required symbol '{0}' missing from snapshot")]
    MissingSymbol(String),

    #[error("required symbol '{0}' has no defined samples")]
    NoDefinedSamples(String),

    #[error("snapshot date domain is empty")]
    EmptyDomain,
}

impl DerivedMetrics {
    /// Compute all metric columns, aligned to the snapshot's union domain.
    ///
    /// Fails when a required symbol is absent or carries no defined samples
    /// at all — those inputs can never contribute and the classifier must
    /// report data unavailable rather than a trigger-less NORMAL.
    pub fn compute(
        snapshot: &MarketSnapshot,
        symbols: &SymbolMap,
        lookbacks: &Lookbacks,
    ) -> Result<Self, MetricsError> {
        let domain = snapshot.domain();
        if domain.is_empty() {
            return Err(MetricsError::EmptyDomain);
        }

        // Alignment onto the union domain preserves every defined sample,
        // so the zero-defined check holds on the aligned view too.
        let aligned = |symbol: &str| -> Result<TimeSeries, MetricsError> {
            let series = snapshot
                .aligned(symbol, &domain)
                .ok_or_else(|| MetricsError::MissingSymbol(symbol.to_string()))?;
            if series.defined_len() == 0 {
                return Err(MetricsError::NoDefinedSamples(symbol.to_string()));
            }
            Ok(series)
        };

        let risky_credit = aligned(&symbols.risky_credit)?;
        let safe_duration = aligned(&symbols.safe_duration)?;
        let vix = aligned(&symbols.volatility)?;
        let equal_weight = aligned(&symbols.equal_weight)?;
        let cap_weight = aligned(&symbols.cap_weight)?;
        let currency = aligned(&symbols.currency)?;

        let credit_delta = risky_credit
            .ratio(&safe_duration)
            .rate_of_change(lookbacks.credit);
        let breadth_delta = equal_weight
            .ratio(&cap_weight)
            .rate_of_change(lookbacks.breadth);
        let currency_delta = currency.rate_of_change(lookbacks.currency);

        Ok(Self {
            credit_delta,
            breadth_delta,
            currency_delta,
            vix,
        })
    }

    /// Number of rows (= domain length).
    pub fn len(&self) -> usize {
        self.vix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vix.is_empty()
    }

    pub fn date(&self, i: usize) -> Option<NaiveDate> {
        self.vix.date(i)
    }
}
