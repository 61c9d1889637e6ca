//! Mock implementations of MetricCollector for testing.

use crate::error::{CollectorError, GatewayError, Result};
use crate::model::{MetricCollector, PollResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A mock collector returning a fixed result or a list failure.
pub struct MockMetricCollector {
    result: Option<PollResult>,
    call_count: Arc<AtomicUsize>,
}

impl MockMetricCollector {
    /// Creates a mock collector that returns `result` on every call.
    pub fn new_with_result(result: PollResult) -> Self {
        Self {
            result: Some(result),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Creates a mock collector whose appliance list always fails.
    pub fn new_failure() -> Self {
        Self {
            result: None,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Gets the number of times this collector has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetricCollector for MockMetricCollector {
    async fn collect(&self, _now: DateTime<Utc>) -> Result<PollResult, CollectorError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match &self.result {
            Some(result) => Ok(result.clone()),
            None => Err(CollectorError::ListFailed(GatewayError::ServerError {
                status: 500,
                message: "mock gateway unavailable".to_string(),
            })),
        }
    }
}
