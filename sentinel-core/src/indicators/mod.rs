//! Indicator library — pure transforms of a single TimeSeries.
//!
//! Both indicators recompute from full history on every call. At the data
//! horizons involved (a few thousand daily samples) this is O(n) and keeps
//! the components stateless and trivially testable; no streaming recurrence.

pub mod ema;
pub mod oscillator;
pub mod volatility;

pub use ema::ema_series;
pub use oscillator::{Oscillator, OscillatorResult};
pub use volatility::{VolatilityBand, VolatilityBands};

/// Create a fully-defined daily series from close prices for testing.
#[cfg(test)]
pub fn make_series(closes: &[f64]) -> crate::domain::TimeSeries {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    crate::domain::TimeSeries::from_pairs(
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| (base_date + chrono::Duration::days(i as i64), close))
            .collect(),
    )
    .unwrap()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
