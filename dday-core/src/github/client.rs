//! HTTP client for the GitHub events API
//!
//! Reads `GET /users/{username}/events?per_page=N`. Unauthenticated requests
//! only see public events and are rate limited per IP; a configured token is
//! sent as a bearer credential.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};

use crate::config::GitHubConfig;
use crate::error::{DataSourceError, Error, Result};
use crate::types::ActivityEvent;

use super::events::parse_events;
use super::EventSource;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// HTTP client for the GitHub REST API
pub struct GitHubClient {
    config: GitHubConfig,
    http_client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a new client from configuration
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: GitHubConfig) -> Result<Self> {
        config.validate()?;

        let base_url = config.api_base.trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("dday/", env!("CARGO_PKG_VERSION"))),
        );

        if let Some(token) = &config.token {
            let auth_value = format!("Bearer {}", token);
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&auth_value)
                    .map_err(|e| Error::Config(format!("invalid github token: {}", e)))?,
            );
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
            base_url,
        })
    }

    /// URL of the events listing for `username`
    pub fn events_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/events?per_page={}",
            self.base_url,
            urlencoding::encode(username),
            self.config.per_page
        )
    }
}

#[async_trait]
impl EventSource for GitHubClient {
    async fn fetch_events(
        &self,
        username: &str,
    ) -> std::result::Result<Vec<ActivityEvent>, DataSourceError> {
        let url = self.events_url(username);
        tracing::debug!(%url, "Fetching GitHub events");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            tracing::warn!(status = status.as_u16(), username, "GitHub events request failed");
            return Err(DataSourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let events = parse_events(&body)?;

        tracing::info!(username, events = events.len(), "Fetched GitHub events");
        Ok(events)
    }
}
