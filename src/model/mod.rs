//! Model definitions for appliance readings and poll results.
//!
//! This module provides the core data structures for representing what the
//! gateway reported about each appliance, and the collector trait the
//! exporter polls through.

pub mod metrics;
pub mod traits;
pub mod types;

// Re-export commonly used items at the module level
pub use metrics::{Appliance, ApplianceReading, PollResult};
pub use traits::MetricCollector;
pub use types::{ApplianceStatus, MetricName, APPLIANCE_LABEL};
