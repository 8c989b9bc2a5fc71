//! Roster API client.

use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, HealthInfo};
use reqwest::{Client, Response};
use roster_core::{CreateUser, User};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Client for the Roster user API.
///
/// Requests use the HTTP client's default timeouts; nothing is retried.
#[derive(Debug, Clone)]
pub struct RosterClient {
    http: Client,
    base_url: String,
}

impl RosterClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        url::Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the server base URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the create-user endpoint.
    pub fn create_user_url(&self) -> String {
        format!("{}/api/user/createUser", self.base_url)
    }

    /// Full URL of the list-users endpoint.
    pub fn list_users_url(&self) -> String {
        format!("{}/api/user/getUsers", self.base_url)
    }

    /// Check that the server is up.
    pub async fn health(&self) -> Result<HealthInfo> {
        let url = format!("{}/api/health", self.base_url);
        debug!(url = %url, "Checking server health");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        parse_response(response, "health").await
    }

    /// Create a user from the given fields.
    ///
    /// Any 2xx status counts as success.
    pub async fn create_user(&self, user: &CreateUser) -> Result<User> {
        let url = self.create_user_url();
        debug!(url = %url, "Creating user");

        let response = self
            .http
            .post(&url)
            .json(user)
            .send()
            .await
            .map_err(map_send_error)?;

        parse_response(response, "created user").await
    }

    /// List every stored user.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = self.list_users_url();
        debug!(url = %url, "Listing users");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        parse_response(response, "user list").await
    }
}

fn map_send_error(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::ServerUnreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse {}: {}", what, e)))
    } else {
        let error_text = response.text().await.unwrap_or_default();
        Err(ClientError::ServerError {
            status: status.as_u16(),
            message: extract_error_message(&error_text),
        })
    }
}

/// Pull the `error` field out of a JSON error body, falling back to the raw text.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}
