//! Core domain types for dday
//!
//! These types describe activity coming in from an event source and the
//! calendar/statistics views derived from it.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Contribution** | One unit of recorded activity (e.g., one commit) attributed to a date |
//! | **Window** | The span of dates aggregated, 84 days ending today, aligned to whole weeks |
//! | **Level** | A 0-4 bucket summarizing a day's contribution count |
//! | **Streak** | A maximal run of consecutive dates with at least one contribution |
//! | **Padding day** | A synthetic future day that fills out the final week |
//!
//! Derived types ([`ContributionGrid`], [`ContributionStats`]) are snapshots:
//! they are rebuilt on every query and never mutated in place.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

// ============================================
// Activity Events
// ============================================

/// Category of an activity event.
///
/// Only pushes and creates carry contributions; everything else is tracked
/// so it can be logged, but counts as zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A push bundling one or more commits
    Push,
    /// Creation of a branch, tag, or repository
    Create,
    /// Any other event type (issues, stars, reviews...)
    Other(String),
}

impl EventKind {
    /// Map a GitHub event `type` tag to a kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "PushEvent" => EventKind::Push,
            "CreateEvent" => EventKind::Create,
            other => EventKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Push => "PushEvent",
            EventKind::Create => "CreateEvent",
            EventKind::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded user action from the event source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// Event category
    pub kind: EventKind,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// Commits bundled in a push (unused for other kinds)
    pub sub_unit_count: Option<u32>,
}

impl ActivityEvent {
    /// Contribution units this event adds to its day.
    ///
    /// Pushes count their commits (missing data counts as 0), creates count
    /// as exactly 1, and all other kinds count as 0.
    pub fn contribution(&self) -> u32 {
        match self.kind {
            EventKind::Push => self.sub_unit_count.unwrap_or(0),
            EventKind::Create => 1,
            EventKind::Other(_) => 0,
        }
    }
}

// ============================================
// Contribution Calendar
// ============================================

/// Discrete intensity bucket for a day's contribution count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ContributionLevel {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl ContributionLevel {
    /// Bucket a count: 0, 1-3, 4-6, 7-10, 11+.
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => ContributionLevel::None,
            1..=3 => ContributionLevel::Low,
            4..=6 => ContributionLevel::Medium,
            7..=10 => ContributionLevel::High,
            _ => ContributionLevel::Max,
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            ContributionLevel::None => 0,
            ContributionLevel::Low => 1,
            ContributionLevel::Medium => 2,
            ContributionLevel::High => 3,
            ContributionLevel::Max => 4,
        }
    }
}

impl From<ContributionLevel> for u8 {
    fn from(level: ContributionLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for ContributionLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ContributionLevel::None),
            1 => Ok(ContributionLevel::Low),
            2 => Ok(ContributionLevel::Medium),
            3 => Ok(ContributionLevel::High),
            4 => Ok(ContributionLevel::Max),
            _ => Err(format!("contribution level out of range: {}", value)),
        }
    }
}

/// One calendar date in the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    /// Total contribution units attributed to this date
    pub count: u32,
    pub level: ContributionLevel,
    /// Synthetic padding after today; never observed, always zero
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub future: bool,
}

impl ContributionDay {
    /// An observed day with its level derived from `count`.
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self {
            date,
            count,
            level: ContributionLevel::from_count(count),
            future: false,
        }
    }

    /// A zero-count padding day past the end of the window.
    pub fn padding(date: NaiveDate) -> Self {
        Self {
            future: true,
            ..Self::new(date, 0)
        }
    }
}

/// Seven consecutive days, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionWeek {
    pub days: Vec<ContributionDay>,
}

/// Week-aligned calendar of contributions for one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionGrid {
    /// Oldest week first
    pub weeks: Vec<ContributionWeek>,
    /// Sum of every day's count
    pub total_count: u32,
    /// First day of the window (always a Sunday)
    pub start_date: NaiveDate,
    /// Last observed day of the window (today), inclusive
    pub end_date: NaiveDate,
}

impl ContributionGrid {
    /// All days in chronological order, padding included.
    pub fn days(&self) -> impl Iterator<Item = &ContributionDay> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    /// Days on or before `end_date`, in chronological order.
    pub fn observed_days(&self) -> impl Iterator<Item = &ContributionDay> {
        self.days().filter(|day| !day.future)
    }
}

// ============================================
// Statistics
// ============================================

/// Summary metrics derived from a [`ContributionGrid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionStats {
    /// Equal to the grid's `total_count`
    pub total_commits: u32,
    /// Consecutive active days ending at the most recent day (today may be skipped)
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Rounded to one decimal place
    pub average_per_day: f64,
    /// Short weekday name ("Sun".."Sat")
    pub most_active_day: String,
    /// Summed counts by weekday (0=Sunday, 6=Saturday)
    pub weekday_totals: [u32; 7],
    /// Observed days with at least one contribution
    pub active_days: u32,
    /// Observed days processed
    pub total_days: u32,
}

impl Default for ContributionStats {
    fn default() -> Self {
        Self {
            total_commits: 0,
            current_streak: 0,
            longest_streak: 0,
            average_per_day: 0.0,
            most_active_day: weekday_name(0).to_string(),
            weekday_totals: [0; 7],
            active_days: 0,
            total_days: 0,
        }
    }
}

impl ContributionStats {
    /// Share of observed days with activity, as a percentage.
    pub fn activity_percentage(&self) -> f64 {
        if self.total_days == 0 {
            0.0
        } else {
            (self.active_days as f64 / self.total_days as f64) * 100.0
        }
    }
}

/// Short day name from a Sunday-based index.
pub fn weekday_name(day: usize) -> &'static str {
    match day {
        0 => "Sun",
        1 => "Mon",
        2 => "Tue",
        3 => "Wed",
        4 => "Thu",
        5 => "Fri",
        6 => "Sat",
        _ => "Unknown",
    }
}

/// Sunday-based index (0=Sunday, 6=Saturday) of a date's weekday.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// True when `date` falls on the first day of a calendar week.
pub fn is_week_start(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}
