//! Domain types: time series, snapshots, governance states.

pub mod series;
pub mod snapshot;
pub mod state;

pub use series::{SeriesError, TimeSeries};
pub use snapshot::MarketSnapshot;
pub use state::{GovernanceLevel, GovernanceState, ReasonCode};
