//! GitHub activity source
//!
//! Contribution aggregation depends only on the [`EventSource`] capability:
//! "give me the recent events for this identity". [`GitHubClient`] implements
//! it over the public events endpoint; tests substitute their own sources.
//!
//! ## Usage
//!
//! Configure the client in `~/.config/dday/config.toml`:
//!
//! ```toml
//! [github]
//! username = "octocat"
//! token = "ghp_xxxxxxxxxxxx"   # optional, raises the rate limit
//! ```

mod client;
mod events;

pub use client::GitHubClient;
pub use events::{parse_events, RawEvent};

use async_trait::async_trait;

use crate::error::DataSourceError;
use crate::types::ActivityEvent;

/// Something that can list recent activity events for an identity.
///
/// Implementations make one read per call and do not retry; callers own
/// retry and deadline policy.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch recent events for `username`, newest first or in any order.
    async fn fetch_events(
        &self,
        username: &str,
    ) -> std::result::Result<Vec<ActivityEvent>, DataSourceError>;
}
