//! Mock implementations and server helpers for testing.
//!
//! This module provides a mock OneM2M gateway builder and mock collectors
//! for testing HTTP interactions and scrape handling.

pub mod collectors;

use mockito::{Mock, Server, ServerGuard};

use crate::test_utils::fixtures::json;

// Re-export collector mocks for convenience
pub use collectors::*;

/// Base container path the mock gateway serves; matches the default test config.
pub const MOCK_BASE_PATH: &str = "Appliance";

/// Builder for creating mockito server mocks for OneM2M gateway endpoints.
pub struct MockGatewayBuilder {
    server: ServerGuard,
    mocks: Vec<Mock>,
}

impl MockGatewayBuilder {
    /// Creates a new mock server builder.
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Gets the server URL.
    pub fn url(&self) -> String {
        self.server.url()
    }

    fn discovery_path() -> String {
        format!("/~{}?fu=1&ty=3&lbl=Type/appliance", MOCK_BASE_PATH)
    }

    fn latest_path(id: &str) -> String {
        format!("/~{}/{}/la", MOCK_BASE_PATH, id)
    }

    async fn respond(mut self, path: &str, status: usize, body: &str) -> Self {
        let mock = self
            .server
            .mock("GET", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        self.mocks.push(mock);
        self
    }

    /// Adds a discovery response listing `paths`.
    pub async fn mock_discovery(self, paths: &[&str]) -> Self {
        self.mock_discovery_body(&json::discovery(paths)).await
    }

    /// Adds a discovery response with a raw 200 body.
    pub async fn mock_discovery_body(self, body: &str) -> Self {
        self.respond(&Self::discovery_path(), 200, body).await
    }

    /// Adds a discovery response with an error status.
    pub async fn mock_discovery_status(self, status: usize) -> Self {
        self.respond(&Self::discovery_path(), status, "").await
    }

    /// Adds a latest data instance for appliance `id`.
    pub async fn mock_latest(self, id: &str, ct: &str, con: &str) -> Self {
        self.mock_latest_body(id, &json::content_instance(ct, con)).await
    }

    /// Adds a raw 200 body for appliance `id`'s latest data instance.
    pub async fn mock_latest_body(self, id: &str, body: &str) -> Self {
        self.respond(&Self::latest_path(id), 200, body).await
    }

    /// Makes appliance `id`'s latest data instance answer with `status`.
    pub async fn mock_latest_status(self, id: &str, status: usize) -> Self {
        self.respond(&Self::latest_path(id), status, "").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_gateway_builder() {
        let gateway = MockGatewayBuilder::new()
            .await
            .mock_discovery(&["Appliance/fridge"])
            .await
            .mock_latest_status("fridge", 404)
            .await;

        assert!(gateway.url().starts_with("http://"));
        assert_eq!(gateway.mocks.len(), 2);
    }
}
