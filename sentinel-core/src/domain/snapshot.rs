//! MarketSnapshot — symbol → TimeSeries map over a shared date domain.
//!
//! The snapshot is the engine's sole input: a basket of already-cleaned
//! price histories keyed by ticker. Members may start later than others or
//! carry gaps; alignment onto the union domain inserts undefined samples,
//! never synthetic prices.

use super::series::TimeSeries;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketSnapshot {
    series: BTreeMap<String, TimeSeries>,
}

impl MarketSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: impl Into<String>, series: TimeSeries) {
        self.series.insert(symbol.into(), series);
    }

    pub fn get(&self, symbol: &str) -> Option<&TimeSeries> {
        self.series.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.series.contains_key(symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// The union of all member date axes, sorted ascending.
    pub fn domain(&self) -> Vec<NaiveDate> {
        let mut all = BTreeSet::new();
        for ts in self.series.values() {
            all.extend(ts.dates().iter().copied());
        }
        all.into_iter().collect()
    }

    /// A member series projected onto the union domain.
    pub fn aligned(&self, symbol: &str, domain: &[NaiveDate]) -> Option<TimeSeries> {
        self.series.get(symbol).map(|ts| ts.align_to(domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn domain_is_union_of_member_dates() {
        let mut snap = MarketSnapshot::new();
        snap.insert(
            "SPY",
            TimeSeries::from_pairs(vec![(d(1), 100.0), (d(2), 101.0)]).unwrap(),
        );
        snap.insert(
            "HYG",
            TimeSeries::from_pairs(vec![(d(2), 75.0), (d(3), 76.0)]).unwrap(),
        );

        assert_eq!(snap.domain(), vec![d(1), d(2), d(3)]);
    }

    #[test]
    fn aligned_inserts_undefined_for_late_start() {
        let mut snap = MarketSnapshot::new();
        snap.insert(
            "SPY",
            TimeSeries::from_pairs(vec![(d(1), 100.0), (d(2), 101.0)]).unwrap(),
        );
        snap.insert("HYG", TimeSeries::from_pairs(vec![(d(2), 75.0)]).unwrap());

        let domain = snap.domain();
        let hyg = snap.aligned("HYG", &domain).unwrap();
        assert_eq!(hyg.value(0), None);
        assert_eq!(hyg.value(1), Some(75.0));
    }

    #[test]
    fn missing_symbol_returns_none() {
        let snap = MarketSnapshot::new();
        assert!(snap.get("^VIX").is_none());
        assert!(snap.aligned("^VIX", &[]).is_none());
    }

    #[test]
    fn empty_snapshot_has_empty_domain() {
        assert!(MarketSnapshot::new().domain().is_empty());
    }
}
