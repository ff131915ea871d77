//! Governance classifier — cross-asset stress triggers and the ordered
//! decision cascade.

pub mod classifier;
pub mod metrics;

pub use classifier::{Classifier, Triggers};
pub use metrics::{DerivedMetrics, MetricsError};
