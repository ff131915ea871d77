//! Forecast projector — closed-form drift/diffusion cone beyond the last
//! observed sample.
//!
//! mean[i]  = last_price * (1 + daily_drift)^i
//! width[i] = z_score * dispersion + dispersion * 0.1 * sqrt(i)
//!
//! Dates step in calendar days, weekends included: this is a display cone,
//! not a trading calendar. Deliberately a heuristic — no simulation, no
//! randomness, fully deterministic given its inputs.

use crate::config::ForecastConfig;
use crate::domain::TimeSeries;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Mean / upper / lower triple over the forward horizon.
///
/// Entirely synthetic; holds no relation to the historical date index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastBand {
    pub mean: TimeSeries,
    pub upper: TimeSeries,
    pub lower: TimeSeries,
}

impl ForecastBand {
    pub fn empty() -> Self {
        Self {
            mean: TimeSeries::empty(),
            upper: TimeSeries::empty(),
            lower: TimeSeries::empty(),
        }
    }

    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ForecastProjector {
    horizon_days: u32,
    daily_drift: f64,
    z_score: f64,
}

impl ForecastProjector {
    pub fn new(horizon_days: u32, daily_drift: f64, z_score: f64) -> Self {
        assert!(daily_drift > -1.0, "daily_drift must be greater than -1");
        assert!(z_score >= 0.0, "z_score must be non-negative");
        Self {
            horizon_days,
            daily_drift,
            z_score,
        }
    }

    pub fn from_config(config: &ForecastConfig, z_score: f64) -> Self {
        Self::new(config.horizon_days, config.daily_drift, z_score)
    }

    /// Project the cone from a single `(last_date, last_price, dispersion)`
    /// anchor. A zero horizon yields the empty band.
    pub fn project(
        &self,
        last_date: NaiveDate,
        last_price: f64,
        last_dispersion: f64,
    ) -> ForecastBand {
        debug_assert!(last_price > 0.0, "forecast anchor price must be positive");
        debug_assert!(
            last_dispersion >= 0.0,
            "forecast anchor dispersion must be non-negative"
        );

        if self.horizon_days == 0 {
            return ForecastBand::empty();
        }

        let n = self.horizon_days as usize;
        let mut dates = Vec::with_capacity(n);
        let mut mean = Vec::with_capacity(n);
        let mut upper = Vec::with_capacity(n);
        let mut lower = Vec::with_capacity(n);

        for i in 1..=n {
            let date = last_date + Duration::days(i as i64);
            let m = last_price * (1.0 + self.daily_drift).powi(i as i32);
            let width =
                self.z_score * last_dispersion + last_dispersion * 0.1 * (i as f64).sqrt();
            dates.push(date);
            mean.push(Some(m));
            upper.push(Some(m + width));
            lower.push(Some(m - width));
        }

        // Calendar-day stepping from a single anchor is strictly increasing.
        let build = |values: Vec<Option<f64>>| {
            TimeSeries::new(dates.clone(), values).expect("forecast dates are strictly increasing")
        };

        ForecastBand {
            mean: build(mean),
            upper: build(upper),
            lower: build(lower),
        }
    }
}
