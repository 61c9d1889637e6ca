//! Typed OneM2M resource representations returned by the gateway.

use crate::error::ParseError;
use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde_derive::Deserialize;

/// Format of the `ct` (creation time) attribute, e.g. `20240615T173000`.
pub const CREATION_TIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Label filter selecting appliance containers in a discovery request.
pub const APPLIANCE_LABEL_FILTER: &str = "Type/appliance";

/// Response to a discovery request (`fu=1`): a list of resource paths.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DiscoveryResponse {
    #[serde(rename = "m2m:uril")]
    pub uril: Vec<String>,
}

impl DiscoveryResponse {
    /// Identifiers of the discovered appliances, in gateway order.
    pub fn appliance_ids(&self, base_path: &str) -> Vec<String> {
        self.uril
            .iter()
            .map(|entry| appliance_id(entry, base_path))
            .collect()
    }
}

/// Response wrapping a single content instance.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ContentInstanceResponse {
    #[serde(rename = "m2m:cin")]
    pub cin: ContentInstance,
}

/// A single data instance: creation time plus string-encoded content.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ContentInstance {
    pub ct: String,
    pub con: String,
}

impl ContentInstance {
    /// Parses `ct` as a wall-clock time in `timezone`.
    ///
    /// Ambiguous local times (DST fall-back) resolve to the earlier instant.
    pub fn creation_time(&self, timezone: &Tz) -> Result<DateTime<Tz>, ParseError> {
        let naive = NaiveDateTime::parse_from_str(&self.ct, CREATION_TIME_FORMAT)
            .map_err(|e| ParseError::datetime_parse(&self.ct, e))?;

        timezone
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| ParseError::nonexistent_local_time(&self.ct, timezone))
    }

    /// Parses `con` as a consumption value.
    pub fn consumption(&self) -> Result<f64, ParseError> {
        self.con
            .trim()
            .parse::<f64>()
            .map_err(|e| ParseError::number_parse(&self.con, e))
    }
}

/// Strips `<base_path>/` from a discovered resource path.
///
/// Entries outside the base path are returned unchanged.
pub fn appliance_id(entry: &str, base_path: &str) -> String {
    let prefix = format!("{}/", base_path.trim_end_matches('/'));
    entry
        .strip_prefix(prefix.as_str())
        .unwrap_or(entry)
        .to_string()
}
