//! Rolling volatility band — moving average with a symmetric dispersion
//! envelope.
//!
//! center[t]     = mean(price[t-window+1 ..= t])
//! dispersion[t] = sample stddev over the same window (n-1 denominator)
//! upper/lower   = center ± z_score * dispersion
//!
//! The first `window - 1` samples are undefined by construction and stay
//! that way — no back-filling. Any undefined sample inside a window makes
//! that window's output undefined.

use crate::config::BandConfig;
use crate::domain::TimeSeries;
use serde::{Deserialize, Serialize};

/// Center / dispersion / upper / lower on the input's date axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityBands {
    pub center: TimeSeries,
    pub dispersion: TimeSeries,
    pub upper: TimeSeries,
    pub lower: TimeSeries,
}

#[derive(Debug, Clone)]
pub struct VolatilityBand {
    window: usize,
    z_score: f64,
}

impl VolatilityBand {
    pub fn new(window: usize, z_score: f64) -> Self {
        // sample stddev needs n-1 >= 1
        assert!(window >= 2, "volatility band window must be >= 2");
        assert!(z_score >= 0.0, "volatility band z_score must be non-negative");
        Self { window, z_score }
    }

    pub fn from_config(config: &BandConfig) -> Self {
        Self::new(config.window, config.z_score)
    }

    pub fn compute(&self, price: &TimeSeries) -> VolatilityBands {
        let n = price.len();
        let mut center = vec![None; n];
        let mut dispersion = vec![None; n];
        let mut upper = vec![None; n];
        let mut lower = vec![None; n];

        if n >= self.window {
            for t in (self.window - 1)..n {
                let start = t + 1 - self.window;
                let window: Option<Vec<f64>> =
                    price.values()[start..=t].iter().copied().collect();
                let Some(window) = window else {
                    continue; // gap inside the window
                };

                let mean = window.iter().sum::<f64>() / self.window as f64;
                let ss: f64 = window
                    .iter()
                    .map(|x| {
                        let diff = x - mean;
                        diff * diff
                    })
                    .sum();
                let std = (ss / (self.window - 1) as f64).sqrt();

                center[t] = Some(mean);
                dispersion[t] = Some(std);
                upper[t] = Some(mean + self.z_score * std);
                lower[t] = Some(mean - self.z_score * std);
            }
        }

        VolatilityBands {
            center: price.with_values(center),
            dispersion: price.with_values(dispersion),
            upper: price.with_values(upper),
            lower: price.with_values(lower),
        }
    }
}
