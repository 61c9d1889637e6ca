use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use std::collections::BTreeMap;

use super::types::ApplianceStatus;

/// The latest data instance an appliance reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Appliance {
    /// Identifier with the base container path stripped (e.g., "fridge")
    pub id: String,
    /// Creation time of the latest data instance
    pub last_seen: DateTime<Tz>,
    /// Consumption value carried by the latest data instance
    pub consumption: f64,
}

impl Appliance {
    /// Derives the on/off status relative to `now`.
    ///
    /// A reading exactly `interval` old still counts as fresh.
    pub fn status_at(&self, now: DateTime<Utc>, interval: TimeDelta) -> ApplianceStatus {
        let age = now.signed_duration_since(self.last_seen.with_timezone(&Utc));
        if age > interval {
            ApplianceStatus::Off
        } else {
            ApplianceStatus::On
        }
    }

    /// Converts the raw reading into the values exported for this cycle.
    pub fn reading_at(&self, now: DateTime<Utc>, interval: TimeDelta) -> ApplianceReading {
        match self.status_at(now, interval) {
            ApplianceStatus::On => ApplianceReading::on(self.consumption),
            ApplianceStatus::Off => ApplianceReading::off(),
        }
    }
}

/// Status and consumption exported for one appliance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplianceReading {
    pub status: ApplianceStatus,
    /// Reported consumption while on, 0 while off
    pub consumption: f64,
}

impl ApplianceReading {
    pub fn on(consumption: f64) -> Self {
        Self {
            status: ApplianceStatus::On,
            consumption,
        }
    }

    pub fn off() -> Self {
        Self {
            status: ApplianceStatus::Off,
            consumption: 0.0,
        }
    }
}

/// Outcome of one poll cycle.
///
/// Appliances whose fetch failed are missing from `readings` but still
/// counted in `appliance_count`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollResult {
    /// Number of entries in the gateway's appliance list
    pub appliance_count: usize,
    /// Readings keyed by appliance identifier
    pub readings: BTreeMap<String, ApplianceReading>,
}

impl PollResult {
    pub fn new(appliance_count: usize) -> Self {
        Self {
            appliance_count,
            readings: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, appliance: impl Into<String>, reading: ApplianceReading) {
        self.readings.insert(appliance.into(), reading);
    }

    pub fn get(&self, appliance: &str) -> Option<&ApplianceReading> {
        self.readings.get(appliance)
    }
}
