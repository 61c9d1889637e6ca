use std::fmt;

/// Metric families published on the `/metrics` endpoint.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum MetricName {
    /// Number of appliances the gateway lists
    ApplianceCount,
    /// Per-appliance on/off gauge
    ApplianceStatus,
    /// Per-appliance last consumption reading
    ApplianceConsumption,
}

impl MetricName {
    /// Help text shown in the exposition format.
    pub fn help(&self) -> &'static str {
        match self {
            MetricName::ApplianceCount => "The number of appliances connected",
            MetricName::ApplianceStatus => "Shows the status of the connected appliance",
            MetricName::ApplianceConsumption => "Shows the current consumed by a device",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MetricName::ApplianceCount => write!(f, "appliance_count"),
            MetricName::ApplianceStatus => write!(f, "appliance_status"),
            MetricName::ApplianceConsumption => write!(f, "appliance_consumption"),
        }
    }
}

/// Label attached to per-appliance gauges.
pub const APPLIANCE_LABEL: &str = "appliance";

/// Whether an appliance is considered running.
///
/// An appliance is on only while the gateway keeps producing fresh readings
/// for it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ApplianceStatus {
    On,
    Off,
}

impl ApplianceStatus {
    /// Value written to the `appliance_status` gauge.
    pub fn gauge_value(&self) -> f64 {
        match self {
            ApplianceStatus::On => 1.0,
            ApplianceStatus::Off => 0.0,
        }
    }
}

impl fmt::Display for ApplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApplianceStatus::On => write!(f, "on"),
            ApplianceStatus::Off => write!(f, "off"),
        }
    }
}
