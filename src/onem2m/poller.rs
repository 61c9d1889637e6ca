//! Appliance poller: lists appliances and turns their latest data instances
//! into status/consumption readings.

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

use crate::config::ExporterConfig;
use crate::error::{CollectorError, ConfigError, GatewayError, Result};
use crate::model::{Appliance, ApplianceReading, MetricCollector, PollResult};
use crate::onem2m::client::Client;
use crate::onem2m::resources::{
    ContentInstanceResponse, DiscoveryResponse, APPLIANCE_LABEL_FILTER,
};

/// Settings fixed at startup that decide how readings are judged.
#[derive(Debug, Clone, PartialEq)]
pub struct PollerConfig {
    /// Readings older than this mark the appliance as off
    pub interval: TimeDelta,
    /// Zone the gateway's creation timestamps are written in
    pub timezone: Tz,
}

impl TryFrom<&ExporterConfig> for PollerConfig {
    type Error = ConfigError;

    fn try_from(config: &ExporterConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            interval: config.interval()?,
            timezone: config.timezone()?,
        })
    }
}

/// Polls the gateway for every appliance's latest reading.
pub struct AppliancePoller {
    client: Arc<Client>,
    config: PollerConfig,
}

impl AppliancePoller {
    /// Creates a new AppliancePoller instance.
    pub fn new(client: Arc<Client>, config: PollerConfig) -> Self {
        Self { client, config }
    }

    /// Fetches the identifiers of all appliances under the base container.
    pub async fn list_appliances(&self) -> Result<Vec<String>, GatewayError> {
        let base_path = self.client.base_path();
        let response: DiscoveryResponse = self
            .client
            .get_resource(
                &format!("/~{}?fu=1&ty=3&lbl={}", base_path, APPLIANCE_LABEL_FILTER),
                "m2m:uril",
            )
            .await?;

        Ok(response.appliance_ids(base_path))
    }

    /// Fetches the latest data instance of `id` and judges it against `now`.
    ///
    /// A 404 means the appliance never reported and yields an "off" reading.
    pub async fn fetch_latest_reading(
        &self,
        id: &str,
        now: DateTime<Utc>,
    ) -> Result<ApplianceReading, GatewayError> {
        match self.fetch_latest(id).await {
            Ok(appliance) => {
                let reading = appliance.reading_at(now, self.config.interval);
                tracing::trace!(
                    appliance = %appliance.id,
                    last_seen = %appliance.last_seen,
                    status = %reading.status,
                    "Judged latest reading"
                );
                Ok(reading)
            }
            Err(e) if e.is_not_found() => Ok(ApplianceReading::off()),
            Err(e) => Err(e),
        }
    }

    async fn fetch_latest(&self, id: &str) -> Result<Appliance, GatewayError> {
        let response: ContentInstanceResponse = self
            .client
            .get_resource(
                &format!("/~{}/{}/la", self.client.base_path(), id),
                "m2m:cin",
            )
            .await?;

        Ok(Appliance {
            id: id.to_string(),
            last_seen: response.cin.creation_time(&self.config.timezone)?,
            consumption: response.cin.consumption()?,
        })
    }
}

#[async_trait]
impl MetricCollector for AppliancePoller {
    async fn collect(&self, now: DateTime<Utc>) -> Result<PollResult, CollectorError> {
        let ids = self
            .list_appliances()
            .await
            .map_err(CollectorError::ListFailed)?;

        let mut result = PollResult::new(ids.len());
        for id in ids {
            match self.fetch_latest_reading(&id, now).await {
                Ok(reading) => result.insert(id, reading),
                Err(e) => {
                    tracing::error!("Error while fetching last value for {}: {}", id, e);
                }
            }
        }

        Ok(result)
    }
}
