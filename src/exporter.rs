//! Prometheus exposition of poll results.
//!
//! Every scrape polls the gateway once and renders the outcome into a fresh
//! registry, so readings from earlier cycles never linger.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use prometheus::{Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

use crate::config::METRICS_PATH;
use crate::error::{ExportError, Result};
use crate::model::{MetricCollector, MetricName, PollResult, APPLIANCE_LABEL};

const TEXT_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

fn opts(name: MetricName) -> Opts {
    Opts::new(name.to_string(), name.help())
}

/// Renders one poll result in the Prometheus text format.
pub fn render(result: &PollResult) -> Result<String, ExportError> {
    let registry = Registry::new();

    let count = Gauge::with_opts(opts(MetricName::ApplianceCount))?;
    let status = GaugeVec::new(opts(MetricName::ApplianceStatus), &[APPLIANCE_LABEL])?;
    let consumption = GaugeVec::new(opts(MetricName::ApplianceConsumption), &[APPLIANCE_LABEL])?;
    registry.register(Box::new(count.clone()))?;
    registry.register(Box::new(status.clone()))?;
    registry.register(Box::new(consumption.clone()))?;

    count.set(result.appliance_count as f64);
    for (appliance, reading) in &result.readings {
        status
            .with_label_values(&[appliance.as_str()])
            .set(reading.status.gauge_value());
        consumption
            .with_label_values(&[appliance.as_str()])
            .set(reading.consumption);
    }

    encode(&registry)
}

fn encode(registry: &Registry) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Polls `collector` and renders the outcome.
///
/// A failed appliance list yields an empty exposition rather than an error,
/// so the scrape itself still succeeds.
pub async fn scrape(collector: &dyn MetricCollector, now: DateTime<Utc>) -> Result<String, ExportError> {
    match collector.collect(now).await {
        Ok(result) => {
            tracing::debug!(
                appliances = result.appliance_count,
                readings = result.readings.len(),
                "Poll completed"
            );
            render(&result)
        }
        Err(e) => {
            tracing::error!("Error while fetching list of appliances: {:?}", e);
            Ok(String::new())
        }
    }
}

/// Shared state of the metrics endpoint.
#[derive(Clone)]
pub struct ExporterState {
    pub collector: Arc<dyn MetricCollector>,
}

/// Handler for GET /metrics
async fn metrics_handler(State(state): State<ExporterState>) -> Response {
    match scrape(state.collector.as_ref(), Utc::now()).await {
        Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            tracing::error!("Failed to render metrics: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// Creates the router serving the metrics endpoint.
pub fn create_router(collector: Arc<dyn MetricCollector>) -> Router {
    Router::new()
        .route(METRICS_PATH, get(metrics_handler))
        .with_state(ExporterState { collector })
}
