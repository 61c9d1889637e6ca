//! OneM2M Appliance Exporter
//!
//! This application exposes the power consumption of appliances registered on a
//! OneM2M gateway as Prometheus metrics.
//!
//! # Architecture
//!
//! Nothing runs in the background. Each scrape of `/metrics` lists the
//! appliances under the configured container and fetches every appliance's
//! latest data instance, one request after another.
//!
//! An appliance whose latest reading is older than the configured interval is
//! reported as off with zero consumption.

mod config;
mod error;
mod exporter;
mod model;
mod onem2m;

#[cfg(test)]
mod test_utils;

use crate::model::MetricCollector;
use crate::onem2m::{AppliancePoller, PollerConfig};
use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal::ctrl_c;
use tokio::signal::unix::{signal, SignalKind};

/// Application entry point.
///
/// Loads configuration, builds the poller and serves the metrics endpoint
/// until SIGTERM or Ctrl-C.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::load_app_config()?;
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .init();

    let exporter_config = config::load_exporter_config()?;
    let onem2m_config = config::load_onem2m_config()?;
    let collector = build_collector(onem2m_config, &exporter_config)?;

    let app = exporter::create_router(collector);
    let addr = SocketAddr::from(([0, 0, 0, 0], config::LISTEN_PORT));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Started serving at {}{}", addr, config::METRICS_PATH);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete.");
    Ok(())
}

/// Wires the gateway client and poller from configuration.
///
/// Fails on an unknown timezone or a zero interval.
fn build_collector(
    onem2m_config: config::OneM2mConfig,
    exporter_config: &config::ExporterConfig,
) -> anyhow::Result<Arc<dyn MetricCollector>> {
    let poller_config = PollerConfig::try_from(exporter_config)?;
    tracing::debug!(
        interval_sec = exporter_config.interval_sec,
        timezone = %poller_config.timezone,
        path = %onem2m_config.path,
        "Poller configured"
    );

    let client = Arc::new(onem2m::Client::new(onem2m_config));
    Ok(Arc::new(AppliancePoller::new(client, poller_config)))
}

/// Resolves when the process receives SIGTERM or SIGINT.
async fn shutdown_signal() {
    let sig_term = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to register SIGTERM handler: {:?}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = sig_term => tracing::info!("Received SIGTERM. Exiting..."),
        _ = ctrl_c() => tracing::info!("Received SIGINT. Exiting..."),
    }
}
