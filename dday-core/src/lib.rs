//! # dday-core
//!
//! Core library for dday - a service-period dashboard.
//!
//! This library provides:
//! - Domain types for activity events and the contribution calendar
//! - A GitHub events client behind the [`EventSource`] trait
//! - Contribution aggregation and streak statistics
//! - D-day arithmetic for a fixed-term service period
//! - A pomodoro timer state machine
//! - Configuration management and logging infrastructure
//!
//! ## Data Flow
//!
//! ```text
//! username -> EventSource -> [ActivityEvent] -> build_grid -> ContributionGrid -> ContributionStats
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use dday_core::analytics::{contribution_grid, contribution_stats};
//! use dday_core::{Config, GitHubClient};
//!
//! # async fn run() -> dday_core::Result<()> {
//! let config = Config::load()?;
//! let client = GitHubClient::new(config.github.clone())?;
//!
//! let grid = contribution_grid(&client, "octocat").await?;
//! let stats = contribution_stats(&grid);
//! println!("{} commits, {} day streak", stats.total_commits, stats.current_streak);
//! # Ok(())
//! # }
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{DataSourceError, Error, Result};
pub use github::{EventSource, GitHubClient};
pub use pomodoro::{Pomodoro, TickOutcome, TimerMode};
pub use service::{DDayInfo, ServicePeriod, Urgency};
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod format;
pub mod github;
pub mod logging;
pub mod pomodoro;
pub mod service;
pub mod types;
