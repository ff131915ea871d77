//! Signal engine — composition root.
//!
//! Given a market snapshot, computes the governance classification, the
//! benchmark oscillator, the volatility bands, and the forward cone, and
//! bundles them into a single result object for external renderers.
//!
//! The engine is single-threaded and fully synchronous: every component is
//! a pure function over in-memory series. A host may evaluate many
//! snapshots in parallel without coordination; nothing here mutates shared
//! state and nothing is cached.

use crate::config::{ConfigError, SignalConfig};
use crate::domain::{GovernanceState, MarketSnapshot};
use crate::forecast::{ForecastBand, ForecastProjector};
use crate::governance::Classifier;
use crate::indicators::{Oscillator, OscillatorResult, VolatilityBand, VolatilityBands};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("benchmark symbol '{0}' missing from snapshot")]
    MissingBenchmark(String),

    #[error("snapshot contains no series")]
    EmptySnapshot,
}

/// Everything a renderer needs for one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalEngineResult {
    /// Classification for the latest date.
    pub governance: GovernanceState,
    /// Row-wise classification over the full domain; populated by
    /// `backtest`, `None` for live evaluation.
    pub history: Option<Vec<GovernanceState>>,
    pub oscillator: OscillatorResult,
    pub bands: VolatilityBands,
    pub forecast: ForecastBand,
    /// Content hash of the configuration that produced this result.
    pub config_id: String,
}

pub struct SignalEngine {
    config: SignalConfig,
    config_id: String,
}

impl SignalEngine {
    /// Build an engine from a validated configuration.
    pub fn new(config: SignalConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let config_id = config.config_id();
        Ok(Self { config, config_id })
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    pub fn config_id(&self) -> &str {
        &self.config_id
    }

    /// Live evaluation: latest governance state, no history.
    pub fn evaluate(&self, snapshot: &MarketSnapshot) -> Result<SignalEngineResult, EngineError> {
        self.run(snapshot, false)
    }

    /// Backtest evaluation: latest state plus the full row-wise history.
    pub fn backtest(&self, snapshot: &MarketSnapshot) -> Result<SignalEngineResult, EngineError> {
        self.run(snapshot, true)
    }

    fn run(
        &self,
        snapshot: &MarketSnapshot,
        with_history: bool,
    ) -> Result<SignalEngineResult, EngineError> {
        if snapshot.is_empty() {
            return Err(EngineError::EmptySnapshot);
        }
        let benchmark = snapshot
            .get(&self.config.symbols.benchmark)
            .ok_or_else(|| EngineError::MissingBenchmark(self.config.symbols.benchmark.clone()))?;

        // Derived metrics feed the triggers, triggers feed the cascade;
        // within one evaluation this ordering is the only one required.
        let oscillator = Oscillator::from_config(&self.config.oscillator).compute(benchmark);
        let bands = VolatilityBand::from_config(&self.config.bands).compute(benchmark);
        let forecast = self.project_forecast(benchmark, &bands);

        let classifier = Classifier::new(&self.config);
        let governance = classifier.classify_latest(snapshot);
        let history = with_history.then(|| classifier.classify_history(snapshot));

        Ok(SignalEngineResult {
            governance,
            history,
            oscillator,
            bands,
            forecast,
            config_id: self.config_id.clone(),
        })
    }

    /// Anchor the cone at the last defined price and last defined
    /// dispersion. Without a usable anchor the cone is simply absent — it
    /// is a display extra, not a required output.
    fn project_forecast(
        &self,
        benchmark: &crate::domain::TimeSeries,
        bands: &VolatilityBands,
    ) -> ForecastBand {
        let anchor = benchmark.last_defined().zip(bands.dispersion.last_defined());
        match anchor {
            Some(((last_date, last_price), (_, last_dispersion)))
                if last_price > 0.0 && last_dispersion >= 0.0 =>
            {
                ForecastProjector::from_config(&self.config.forecast, self.config.bands.z_score)
                    .project(last_date, last_price, last_dispersion)
            }
            _ => ForecastBand::empty(),
        }
    }
}
