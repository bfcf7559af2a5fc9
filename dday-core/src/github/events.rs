//! Wire format of GitHub's `/users/{username}/events` response.
//!
//! Parsing is best-effort per event: the response as a whole must be a JSON
//! array, but an individual entry that is missing its type or timestamp is
//! dropped rather than failing the batch.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::DataSourceError;
use crate::types::{ActivityEvent, EventKind};

/// A single event as returned by the API (only the fields we read).
#[derive(Debug, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub payload: RawPayload,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPayload {
    /// Commits in a push (the API truncates this list to 20)
    pub commits: Option<Vec<serde_json::Value>>,
    /// Total commits in a push
    pub size: Option<u32>,
}

impl RawEvent {
    /// Convert to a domain event, or `None` if the entry is unusable.
    pub fn into_activity(self) -> Option<ActivityEvent> {
        let kind = EventKind::from_tag(self.kind.as_deref()?);
        let timestamp = DateTime::parse_from_rfc3339(self.created_at.as_deref()?)
            .ok()?
            .with_timezone(&Utc);

        let sub_unit_count = match kind {
            EventKind::Push => self
                .payload
                .commits
                .as_ref()
                .map(|commits| commits.len() as u32)
                .or(self.payload.size),
            _ => None,
        };

        Some(ActivityEvent {
            kind,
            timestamp,
            sub_unit_count,
        })
    }
}

/// Parse a response body into activity events.
///
/// Fails only if the body is not a JSON array.
pub fn parse_events(body: &str) -> std::result::Result<Vec<ActivityEvent>, DataSourceError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| DataSourceError::Payload(e.to_string()))?;

    let total = entries.len();
    let events: Vec<ActivityEvent> = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<RawEvent>(entry) {
            Ok(raw) => raw.into_activity(),
            Err(e) => {
                tracing::debug!("Skipping malformed event: {}", e);
                None
            }
        })
        .collect();

    if events.len() < total {
        tracing::debug!(
            skipped = total - events.len(),
            total,
            "Ignored events without a usable type or timestamp"
        );
    }

    Ok(events)
}
