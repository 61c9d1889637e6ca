//! Configuration utilities for testing.

use crate::config::OneM2mConfig;
use crate::onem2m::PollerConfig;
use crate::test_utils::fixtures::zones;
use chrono::TimeDelta;

/// Builder for creating test OneM2M gateway configurations.
#[derive(Debug)]
pub struct TestOneM2mConfigBuilder {
    url: String,
    path: String,
    username: String,
    password: String,
}

impl TestOneM2mConfigBuilder {
    /// Creates a new test config builder with default values.
    pub fn new() -> Self {
        Self {
            url: "http://gateway.test".to_string(),
            path: "Appliance".to_string(),
            username: "test_user".to_string(),
            password: "test_password".to_string(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn build(self) -> OneM2mConfig {
        OneM2mConfig {
            url: self.url,
            path: self.path,
            username: self.username,
            password: self.password,
        }
    }
}

/// Creates a default test gateway configuration.
pub fn test_onem2m_config() -> OneM2mConfig {
    TestOneM2mConfigBuilder::new().build()
}

/// Creates a test gateway configuration pointing at a mock server.
pub fn test_onem2m_config_with_url(url: impl Into<String>) -> OneM2mConfig {
    TestOneM2mConfigBuilder::new().with_url(url).build()
}

/// Poller settings used across tests: 30 second interval in the test zone.
pub fn test_poller_config() -> PollerConfig {
    PollerConfig {
        interval: TimeDelta::seconds(30),
        timezone: zones::test_zone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onem2m_config_builder() {
        let config = TestOneM2mConfigBuilder::new()
            .with_url("http://custom.local")
            .with_path("/in-cse/in-name/Appliance")
            .with_credentials("admin", "secret")
            .build();

        assert_eq!(config.url, "http://custom.local");
        assert_eq!(config.path, "/in-cse/in-name/Appliance");
        assert_eq!(config.originator(), "admin:secret");
    }

    #[test]
    fn test_convenience_functions() {
        assert_eq!(test_onem2m_config().url, "http://gateway.test");
        assert_eq!(test_onem2m_config_with_url("http://mock.local").url, "http://mock.local");
        assert_eq!(test_poller_config().interval, TimeDelta::seconds(30));
    }
}
