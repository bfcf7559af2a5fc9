//! Error types for dday-core

use thiserror::Error;

/// Main error type for the dday-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// The activity event source could not be read
    #[error("data source error: {0}")]
    DataSource(#[from] DataSourceError),

    /// Entry/discharge dates do not form a valid service period
    #[error("invalid service period: {0}")]
    InvalidServicePeriod(String),
}

/// Failure while fetching activity events from an external source.
///
/// Never retried internally; the caller decides whether to try again.
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// Network or transport failure (DNS, connect, timeout)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Source answered with a non-success status
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// Response body was not a list of events
    #[error("malformed payload: {0}")]
    Payload(String),
}

/// Result type alias for dday-core
pub type Result<T> = std::result::Result<T, Error>;
