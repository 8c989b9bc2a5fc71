//! Types for Roster API requests and responses.

use serde::Deserialize;

/// Server the registration form posts to when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Configuration for connecting to a Roster server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "http://localhost:3000")
    pub url: String,
}

impl ClientConfig {
    /// Create a new config for the given base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

/// Response from `GET /api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    pub version: String,
}
