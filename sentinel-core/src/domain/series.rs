//! TimeSeries — the date-indexed sample sequence every component consumes.
//!
//! Dates are strictly increasing, one sample per date. A sample may be
//! undefined (`None`); undefined propagates through every transform and is
//! never coerced to zero. Series are immutable: every transform returns a
//! new series on the same or an aligned date axis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered `(date, Option<value>)` sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    dates: Vec<NaiveDate>,
    values: Vec<Option<f64>>,
}

#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    #[error("dates/values length mismatch: {dates} dates, {values} values")]
    LengthMismatch { dates: usize, values: usize },

    #[error("dates not strictly increasing at index {0}")]
    UnorderedDates(usize),
}

impl TimeSeries {
    /// Build a series from parallel date and value vectors.
    pub fn new(dates: Vec<NaiveDate>, values: Vec<Option<f64>>) -> Result<Self, SeriesError> {
        if dates.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                dates: dates.len(),
                values: values.len(),
            });
        }
        for i in 1..dates.len() {
            if dates[i] <= dates[i - 1] {
                return Err(SeriesError::UnorderedDates(i));
            }
        }
        Ok(Self { dates, values })
    }

    /// Build a fully-defined series from `(date, value)` pairs.
    pub fn from_pairs(pairs: Vec<(NaiveDate, f64)>) -> Result<Self, SeriesError> {
        let (dates, values) = pairs.into_iter().map(|(d, v)| (d, Some(v))).unzip();
        Self::new(dates, values)
    }

    pub fn empty() -> Self {
        Self {
            dates: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Sample at index `i`; `None` when undefined or out of bounds.
    pub fn value(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied().flatten()
    }

    pub fn date(&self, i: usize) -> Option<NaiveDate> {
        self.dates.get(i).copied()
    }

    /// The most recent defined sample, if any.
    pub fn last_defined(&self) -> Option<(NaiveDate, f64)> {
        self.dates
            .iter()
            .zip(&self.values)
            .rev()
            .find_map(|(d, v)| v.map(|x| (*d, x)))
    }

    /// Number of defined samples.
    pub fn defined_len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Replace the value column, keeping the date axis.
    ///
    /// Used by transforms that compute a new column over the same index.
    pub fn with_values(&self, values: Vec<Option<f64>>) -> Self {
        debug_assert_eq!(
            values.len(),
            self.dates.len(),
            "value column length must match the date axis"
        );
        Self {
            dates: self.dates.clone(),
            values,
        }
    }

    /// Project this series onto a new date axis.
    ///
    /// Dates absent from the source become undefined samples (no
    /// forward-fill; gap handling belongs to the data collaborator).
    pub fn align_to(&self, axis: &[NaiveDate]) -> Self {
        let lookup: HashMap<NaiveDate, Option<f64>> = self
            .dates
            .iter()
            .zip(&self.values)
            .map(|(d, v)| (*d, *v))
            .collect();
        let values = axis
            .iter()
            .map(|d| lookup.get(d).copied().flatten())
            .collect();
        Self {
            dates: axis.to_vec(),
            values,
        }
    }

    /// Element-wise ratio `self / denom` over a shared date axis.
    ///
    /// Defined only where both sides are defined and the denominator is
    /// nonzero. Callers align both series to a common axis first.
    pub fn ratio(&self, denom: &TimeSeries) -> Self {
        debug_assert_eq!(self.dates, denom.dates, "ratio requires a shared date axis");
        let values = self
            .values
            .iter()
            .zip(&denom.values)
            .map(|(a, b)| match (a, b) {
                (Some(n), Some(d)) if *d != 0.0 => Some(n / d),
                _ => None,
            })
            .collect();
        self.with_values(values)
    }

    /// Fractional change over a fixed lookback of `k` samples:
    /// `(v[t] - v[t-k]) / v[t-k]`.
    ///
    /// Undefined for the first `k` samples and wherever either endpoint is
    /// undefined or the base is zero.
    pub fn rate_of_change(&self, k: usize) -> Self {
        assert!(k >= 1, "rate_of_change lookback must be >= 1");
        let n = self.len();
        let mut values = vec![None; n];
        for t in k..n {
            if let (Some(prev), Some(curr)) = (self.value(t - k), self.value(t)) {
                if prev != 0.0 {
                    values[t] = Some((curr - prev) / prev);
                }
            }
        }
        self.with_values(values)
    }
}
