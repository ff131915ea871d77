//! Sentinel Core — market risk-signal engine.
//!
//! This crate turns a basket of daily price histories into three derived
//! signals:
//! - A discrete, ordered governance state (NORMAL → WATCHLIST → CAUTION →
//!   EMERGENCY) from cross-asset stress ratios
//! - A percentage price oscillator for a single benchmark series
//! - A rolling volatility band plus a forward projection cone
//!
//! The engine is a pure function from time-series input to signal output:
//! no network, file, or process boundary, no caching, no shared mutable
//! state. Data acquisition and rendering are external collaborators.

pub mod config;
pub mod domain;
pub mod engine;
pub mod forecast;
pub mod governance;
pub mod indicators;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: engine inputs and outputs are Send + Sync, so a
    /// host may fan evaluations out across threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::TimeSeries>();
        require_sync::<domain::TimeSeries>();
        require_send::<domain::MarketSnapshot>();
        require_sync::<domain::MarketSnapshot>();
        require_send::<domain::GovernanceState>();
        require_sync::<domain::GovernanceState>();

        require_send::<config::SignalConfig>();
        require_sync::<config::SignalConfig>();

        require_send::<engine::SignalEngine>();
        require_sync::<engine::SignalEngine>();
        require_send::<engine::SignalEngineResult>();
        require_sync::<engine::SignalEngineResult>();

        require_send::<indicators::OscillatorResult>();
        require_sync::<indicators::OscillatorResult>();
        require_send::<indicators::VolatilityBands>();
        require_sync::<indicators::VolatilityBands>();
        require_send::<forecast::ForecastBand>();
        require_sync::<forecast::ForecastBand>();
    }
}
