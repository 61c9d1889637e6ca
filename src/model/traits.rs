use crate::error::{CollectorError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::metrics::PollResult;

/// Trait for types that can poll appliance readings.
///
/// The exporter calls this once per scrape. Implementors must be thread-safe
/// (Send + Sync) because overlapping scrapes share one instance.
#[async_trait]
pub trait MetricCollector: Send + Sync {
    /// Runs one poll cycle, judging staleness against `now`.
    ///
    /// # Returns
    /// - `Ok(PollResult)` once the appliance list was fetched, even if some
    ///   per-appliance fetches failed
    /// - `Err` if the cycle had to be abandoned
    async fn collect(&self, now: DateTime<Utc>) -> Result<PollResult, CollectorError>;
}
