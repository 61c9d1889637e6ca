//! Error types for the OneM2M appliance exporter.
//!
//! This module defines typed errors for the different components of the application,
//! so callers can tell a gateway that answered 404 apart from one that is unreachable.

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// OneM2M gateway communication and decoding errors
    #[error("gateway error")]
    Gateway(#[from] GatewayError),

    /// Poll errors
    #[error("collector error")]
    Collector(#[from] CollectorError),

    /// Prometheus rendering errors
    #[error("export error")]
    Export(#[from] ExportError),

    /// Generic errors that don't fit other categories
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration value is invalid
    #[error("invalid configuration value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// OneM2M gateway communication and decoding errors.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested resource does not exist (404)
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The gateway rejected the originator credentials (401/403)
    #[error("authentication failed: gateway rejected originator (status {0})")]
    AuthFailed(u16),

    /// Server returned an error status
    #[error("server error (status {status}): {message}")]
    ServerError { status: u16, message: String },

    /// Response body did not match the expected resource shape
    #[error("failed to decode {resource} response: {message}")]
    Decode { resource: String, message: String },

    /// A field inside a decoded resource could not be interpreted
    #[error("invalid resource content: {0}")]
    Parse(#[from] ParseError),
}

/// Errors interpreting field values of gateway resources.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Failed to parse numeric value
    #[error("failed to parse number from '{text}': {message}")]
    NumberParse { text: String, message: String },

    /// Failed to parse date/time
    #[error("failed to parse date/time from '{text}': {message}")]
    DateTimeParse { text: String, message: String },

    /// The local time does not exist in the configured timezone
    #[error("local time '{text}' does not exist in timezone {timezone}")]
    NonexistentLocalTime { text: String, timezone: String },
}

/// Poll errors that abort a whole collection cycle.
#[derive(Error, Debug)]
pub enum CollectorError {
    /// The appliance list could not be fetched
    #[error("failed to list appliances")]
    ListFailed(#[source] GatewayError),
}

/// Errors building or encoding Prometheus metrics.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Metric construction or registration failed
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    /// Encoded exposition was not valid UTF-8
    #[error("encoded metrics are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl ConfigError {
    /// Creates a new invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl GatewayError {
    /// Creates an error from a non-success HTTP status and response body.
    pub fn server_error(status: reqwest::StatusCode, body: String) -> Self {
        match status.as_u16() {
            404 => Self::NotFound(body),
            401 | 403 => Self::AuthFailed(status.as_u16()),
            code => Self::ServerError {
                status: code,
                message: body,
            },
        }
    }

    /// Creates a decode error for the named resource.
    pub fn decode(resource: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            resource: resource.into(),
            message: err.to_string(),
        }
    }

    /// Returns true if the gateway answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl ParseError {
    /// Creates a number parse error.
    pub fn number_parse(text: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::NumberParse {
            text: text.into(),
            message: err.to_string(),
        }
    }

    /// Creates a datetime parse error.
    pub fn datetime_parse(text: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::DateTimeParse {
            text: text.into(),
            message: err.to_string(),
        }
    }

    /// Creates a non-existent local time error.
    pub fn nonexistent_local_time(text: impl Into<String>, timezone: impl std::fmt::Display) -> Self {
        Self::NonexistentLocalTime {
            text: text.into(),
            timezone: timezone.to_string(),
        }
    }
}
