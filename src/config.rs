use crate::error::ConfigError;
use anyhow::{anyhow, Result};
use chrono::TimeDelta;
use chrono_tz::Tz;
use serde_derive::Deserialize;
use std::str::FromStr;

/// Port the metrics endpoint listens on.
pub const LISTEN_PORT: u16 = 9876;

/// Path the metrics endpoint is served at.
pub const METRICS_PATH: &str = "/metrics";

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig> {
    match envy::from_env::<AppConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load AppConfig: {}", err)),
    }
}

fn default_interval_sec() -> u64 {
    30
}

fn default_timezone() -> String {
    "Asia/Kolkata".to_string()
}

#[derive(Deserialize, Debug, Clone)]
pub struct ExporterConfig {
    // readings older than this are treated as "appliance off"
    #[serde(default = "default_interval_sec")]
    pub interval_sec: u64,
    // zone the gateway writes `ct` timestamps in
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl ExporterConfig {
    /// Staleness interval as a signed time delta for comparing against reading ages.
    pub fn interval(&self) -> Result<TimeDelta, ConfigError> {
        if self.interval_sec == 0 {
            return Err(ConfigError::invalid("interval_sec", "must be greater than zero"));
        }
        i64::try_from(self.interval_sec)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .ok_or_else(|| ConfigError::invalid("interval_sec", "out of range"))
    }

    /// Parses the configured IANA timezone name.
    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        Tz::from_str(&self.timezone).map_err(|e| ConfigError::invalid("timezone", e.to_string()))
    }
}

pub fn load_exporter_config() -> Result<ExporterConfig> {
    match envy::prefixed("EXPORTER_").from_env::<ExporterConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load ExporterConfig: {}", err)),
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct OneM2mConfig {
    pub url: String,
    pub path: String,
    pub username: String,
    pub password: String,
}

impl OneM2mConfig {
    /// Value of the `X-M2M-Origin` header sent with every request.
    pub fn originator(&self) -> String {
        format!("{}:{}", self.username, self.password)
    }
}

pub(crate) fn load_onem2m_config() -> Result<OneM2mConfig> {
    match envy::prefixed("ONEM2M_").from_env::<OneM2mConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load OneM2mConfig: {}", err)),
    }
}
