//! Percentage price oscillator — fast/slow EMA spread as a percentage.
//!
//! line[t]      = (emaFast[t] - emaSlow[t]) / emaSlow[t] * 100
//! signal[t]    = EMA(line, signal_span)
//! histogram[t] = line[t] - signal[t]
//!
//! Output axis equals the input axis; the EMA recursion starts at index 0,
//! so no leading warmup gap is introduced (the first few samples reflect
//! initialization transient instead).

use super::ema::ema_series;
use crate::config::OscillatorConfig;
use crate::domain::TimeSeries;
use serde::{Deserialize, Serialize};

/// Line / signal / histogram triple on the input's date axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillatorResult {
    pub line: TimeSeries,
    pub signal: TimeSeries,
    pub histogram: TimeSeries,
}

#[derive(Debug, Clone)]
pub struct Oscillator {
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
}

impl Oscillator {
    pub fn new(fast_span: usize, slow_span: usize, signal_span: usize) -> Self {
        assert!(fast_span >= 1, "oscillator fast_span must be >= 1");
        assert!(signal_span >= 1, "oscillator signal_span must be >= 1");
        assert!(
            fast_span < slow_span,
            "oscillator fast_span must be less than slow_span"
        );
        Self {
            fast_span,
            slow_span,
            signal_span,
        }
    }

    pub fn from_config(config: &OscillatorConfig) -> Self {
        Self::new(config.fast_span, config.slow_span, config.signal_span)
    }

    pub fn compute(&self, price: &TimeSeries) -> OscillatorResult {
        let fast = ema_series(price.values(), self.fast_span);
        let slow = ema_series(price.values(), self.slow_span);

        // Zero slow EMA: division is undefined, propagate rather than raise.
        let line: Vec<Option<f64>> = fast
            .iter()
            .zip(&slow)
            .map(|(f, s)| match (f, s) {
                (Some(f), Some(s)) if *s != 0.0 => Some((f - s) / s * 100.0),
                _ => None,
            })
            .collect();

        let signal = ema_series(&line, self.signal_span);

        let histogram: Vec<Option<f64>> = line
            .iter()
            .zip(&signal)
            .map(|(l, s)| match (l, s) {
                (Some(l), Some(s)) => Some(l - s),
                _ => None,
            })
            .collect();

        OscillatorResult {
            line: price.with_values(line),
            signal: price.with_values(signal),
            histogram: price.with_values(histogram),
        }
    }
}
