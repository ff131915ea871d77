//! Governance state — the discrete risk classification for one evaluation date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered risk level.
///
/// `Normal < Watchlist < Caution < Emergency` by severity. `DataUnavailable`
/// deliberately sorts above everything: an aggregation taking the maximum
/// over a set of states can never collapse missing data into a safe reading.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GovernanceLevel {
    Normal,
    Watchlist,
    Caution,
    Emergency,
    DataUnavailable,
}

impl GovernanceLevel {
    /// Severity rank: 0 (Normal) through 3 (Emergency); 4 for DataUnavailable.
    pub fn severity(self) -> u8 {
        self as u8
    }

    /// Display color, carried along for renderers only. Classification never
    /// reads it.
    pub fn color(self) -> &'static str {
        match self {
            GovernanceLevel::Normal => "#00d26a",
            GovernanceLevel::Watchlist => "#f1c40f",
            GovernanceLevel::Caution => "#ffaa00",
            GovernanceLevel::Emergency => "#f93e3e",
            GovernanceLevel::DataUnavailable => "#888888",
        }
    }
}

impl fmt::Display for GovernanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GovernanceLevel::Normal => "NORMAL",
            GovernanceLevel::Watchlist => "WATCHLIST",
            GovernanceLevel::Caution => "CAUTION",
            GovernanceLevel::Emergency => "EMERGENCY",
            GovernanceLevel::DataUnavailable => "DATA_UNAVAILABLE",
        };
        f.write_str(label)
    }
}

/// Why a level was assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    Nominal,
    BreadthNarrowing,
    ElevatedVolatility,
    CreditCurrencyStress,
    ExtremeVolatility,
    StructuralFailure,
    MissingSymbol,
    InsufficientHistory,
}

impl ReasonCode {
    pub fn message(self) -> &'static str {
        match self {
            ReasonCode::Nominal => "nominal",
            ReasonCode::BreadthNarrowing => "breadth narrowing",
            ReasonCode::ElevatedVolatility => "elevated volatility",
            ReasonCode::CreditCurrencyStress => "credit/currency stress",
            ReasonCode::ExtremeVolatility => "extreme volatility",
            ReasonCode::StructuralFailure => "structural failure confirmed",
            ReasonCode::MissingSymbol => "required symbol missing",
            ReasonCode::InsufficientHistory => "no defined samples",
        }
    }
}

/// One classification outcome. Created fresh per evaluation date, never
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceState {
    /// Evaluation date; `None` when classification failed before a date
    /// could be established (missing symbol, empty domain).
    pub date: Option<NaiveDate>,
    pub level: GovernanceLevel,
    pub reason: ReasonCode,
}

impl GovernanceState {
    pub fn new(date: NaiveDate, level: GovernanceLevel, reason: ReasonCode) -> Self {
        Self {
            date: Some(date),
            level,
            reason,
        }
    }

    pub fn unavailable(date: Option<NaiveDate>, reason: ReasonCode) -> Self {
        Self {
            date,
            level: GovernanceLevel::DataUnavailable,
            reason,
        }
    }
}
