//! Serializable engine configuration.
//!
//! Every tunable named by the classifier, indicator library, and projector
//! lives here with its documented production default. Call sites never carry
//! magic numbers; behavior is reproducible from a config value alone.

use serde::{Deserialize, Serialize};

/// Full engine configuration.
///
/// All sections default to the production values, so `SignalConfig::default()`
/// is a valid, fully-specified configuration and a TOML file only needs to
/// name the fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    pub thresholds: Thresholds,
    pub oscillator: OscillatorConfig,
    pub bands: BandConfig,
    pub forecast: ForecastConfig,
    pub lookbacks: Lookbacks,
    pub symbols: SymbolMap,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            oscillator: OscillatorConfig::default(),
            bands: BandConfig::default(),
            forecast: ForecastConfig::default(),
            lookbacks: Lookbacks::default(),
            symbols: SymbolMap::default(),
        }
    }
}

/// Trigger thresholds for the governance classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Credit ratio 10-day change below this fires the stress trigger.
    pub credit_delta: f64,
    /// Currency index 5-day change above this fires the stress trigger.
    pub currency_delta: f64,
    /// Volatility index level above this fires the vol trigger.
    ///
    /// Historical deployments used both 24.0 and 25.0; the default is the
    /// stricter 24.0. Tunable, not a law.
    pub vol_level: f64,
    /// Volatility index level above this is an independent emergency
    /// override.
    pub extreme_vol_level: f64,
    /// Breadth ratio 20-day change below this fires the breadth trigger.
    pub breadth_delta: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            credit_delta: -0.015,
            currency_delta: 0.02,
            vol_level: 24.0,
            extreme_vol_level: 30.0,
            breadth_delta: -0.025,
        }
    }
}

/// Spans for the percentage price oscillator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillatorConfig {
    pub fast_span: usize,
    pub slow_span: usize,
    pub signal_span: usize,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            fast_span: 12,
            slow_span: 26,
            signal_span: 9,
        }
    }
}

/// Rolling volatility band parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandConfig {
    /// Rolling window length in samples.
    pub window: usize,
    /// Band half-width in dispersion units (~80% two-sided normal quantile
    /// by default — a fair-value cone, not a rigorous CI).
    pub z_score: f64,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            window: 20,
            z_score: 1.28,
        }
    }
}

/// Forward projection cone parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Projection horizon in calendar days (weekends included; this is a
    /// display cone, not a trading calendar).
    pub horizon_days: u32,
    /// Compounding geometric drift per calendar day.
    pub daily_drift: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_days: 30,
            daily_drift: 0.0003,
        }
    }
}

/// Rate-of-change lookbacks (trading observations) per derived metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lookbacks {
    pub credit: usize,
    pub breadth: usize,
    pub currency: usize,
}

impl Default for Lookbacks {
    fn default() -> Self {
        Self {
            credit: 10,
            breadth: 20,
            currency: 5,
        }
    }
}

/// Role → ticker map for the snapshot members the classifier consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolMap {
    pub risky_credit: String,
    pub safe_duration: String,
    pub volatility: String,
    pub equal_weight: String,
    pub cap_weight: String,
    pub currency: String,
    /// Benchmark price series for the oscillator, bands, and forecast.
    pub benchmark: String,
}

impl Default for SymbolMap {
    fn default() -> Self {
        Self {
            risky_credit: "HYG".into(),
            safe_duration: "IEF".into(),
            volatility: "^VIX".into(),
            equal_weight: "RSP".into(),
            cap_weight: "SPY".into(),
            currency: "DX-Y.NYB".into(),
            benchmark: "SPY".into(),
        }
    }
}

impl SymbolMap {
    /// The six classifier inputs, in a fixed reporting order.
    pub fn required(&self) -> [&str; 6] {
        [
            &self.risky_credit,
            &self.safe_duration,
            &self.volatility,
            &self.equal_weight,
            &self.cap_weight,
            &self.currency,
        ]
    }

    /// Every ticker the engine reads, deduplicated, benchmark included.
    pub fn all(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.required().to_vec();
        if !out.contains(&self.benchmark.as_str()) {
            out.push(&self.benchmark);
        }
        out
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be >= {min} (got {value})")]
    PeriodOutOfRange {
        name: &'static str,
        min: usize,
        value: usize,
    },

    #[error("fast_span ({fast}) must be less than slow_span ({slow})")]
    SpansInverted { fast: usize, slow: usize },

    #[error("z_score must be non-negative (got {0})")]
    NegativeZScore(f64),

    #[error("daily_drift must be greater than -1 (got {0})")]
    DriftOutOfRange(f64),

    #[error("extreme_vol_level ({extreme}) must be >= vol_level ({vol})")]
    VolLevelsInverted { vol: f64, extreme: f64 },

    #[error("symbol for role '{0}' is empty")]
    EmptySymbol(&'static str),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SignalConfig {
    /// Reject out-of-domain constants at construction time, not at
    /// evaluation time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods: [(&'static str, usize, usize); 6] = [
            ("oscillator.fast_span", self.oscillator.fast_span, 1),
            ("oscillator.slow_span", self.oscillator.slow_span, 1),
            ("oscillator.signal_span", self.oscillator.signal_span, 1),
            ("bands.window", self.bands.window, 2),
            ("lookbacks.credit", self.lookbacks.credit, 1),
            ("lookbacks.breadth", self.lookbacks.breadth, 1),
        ];
        for (name, value, min) in periods {
            if value < min {
                return Err(ConfigError::PeriodOutOfRange { name, min, value });
            }
        }
        if self.lookbacks.currency < 1 {
            return Err(ConfigError::PeriodOutOfRange {
                name: "lookbacks.currency",
                min: 1,
                value: self.lookbacks.currency,
            });
        }
        if self.oscillator.fast_span >= self.oscillator.slow_span {
            return Err(ConfigError::SpansInverted {
                fast: self.oscillator.fast_span,
                slow: self.oscillator.slow_span,
            });
        }
        if self.bands.z_score < 0.0 {
            return Err(ConfigError::NegativeZScore(self.bands.z_score));
        }
        if self.forecast.daily_drift <= -1.0 {
            return Err(ConfigError::DriftOutOfRange(self.forecast.daily_drift));
        }
        if self.thresholds.extreme_vol_level < self.thresholds.vol_level {
            return Err(ConfigError::VolLevelsInverted {
                vol: self.thresholds.vol_level,
                extreme: self.thresholds.extreme_vol_level,
            });
        }
        let roles: [(&'static str, &str); 7] = [
            ("risky_credit", &self.symbols.risky_credit),
            ("safe_duration", &self.symbols.safe_duration),
            ("volatility", &self.symbols.volatility),
            ("equal_weight", &self.symbols.equal_weight),
            ("cap_weight", &self.symbols.cap_weight),
            ("currency", &self.symbols.currency),
            ("benchmark", &self.symbols.benchmark),
        ];
        for (role, ticker) in roles {
            if ticker.is_empty() {
                return Err(ConfigError::EmptySymbol(role));
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SignalConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Deterministic content hash of this configuration.
    ///
    /// Two evaluations with identical configs share an id, so downstream
    /// artifacts can be traced back to the exact parameter set.
    pub fn config_id(&self) -> String {
        let json = serde_json::to_string(self).expect("SignalConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SignalConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_window() {
        let mut config = SignalConfig::default();
        config.bands.window = 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PeriodOutOfRange { name: "bands.window", .. })
        ));
    }

    #[test]
    fn rejects_inverted_spans() {
        let mut config = SignalConfig::default();
        config.oscillator.fast_span = 26;
        config.oscillator.slow_span = 12;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpansInverted { .. })
        ));
    }

    #[test]
    fn rejects_negative_z_score() {
        let mut config = SignalConfig::default();
        config.bands.z_score = -0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeZScore(_))
        ));
    }

    #[test]
    fn rejects_extreme_vol_below_vol() {
        let mut config = SignalConfig::default();
        config.thresholds.extreme_vol_level = 20.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::VolLevelsInverted { .. })
        ));
    }

    #[test]
    fn partial_toml_overrides_defaults() {
        let config = SignalConfig::from_toml_str(
            r#"
            [thresholds]
            vol_level = 25.0

            [symbols]
            benchmark = "^DJI"
            "#,
        )
        .unwrap();
        assert_eq!(config.thresholds.vol_level, 25.0);
        assert_eq!(config.symbols.benchmark, "^DJI");
        // untouched sections keep production defaults
        assert_eq!(config.thresholds.credit_delta, -0.015);
        assert_eq!(config.oscillator.slow_span, 26);
    }

    #[test]
    fn toml_validation_still_applies() {
        let result = SignalConfig::from_toml_str(
            r#"
            [bands]
            window = 0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn config_id_is_stable_and_sensitive() {
        let a = SignalConfig::default();
        let mut b = SignalConfig::default();
        assert_eq!(a.config_id(), b.config_id());
        b.thresholds.vol_level = 25.0;
        assert_ne!(a.config_id(), b.config_id());
    }

    #[test]
    fn all_symbols_dedupes_benchmark() {
        let symbols = SymbolMap::default();
        // default benchmark SPY is already the cap-weight proxy
        assert_eq!(symbols.all().len(), 6);

        let mut other = SymbolMap::default();
        other.benchmark = "^IXIC".into();
        assert_eq!(other.all().len(), 7);
    }
}
