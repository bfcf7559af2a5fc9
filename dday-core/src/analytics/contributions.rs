//! Contribution calendar aggregation.
//!
//! Buckets activity events into a day-indexed grid covering the last 84 days,
//! widened backward to start on a Sunday so every column is a whole week.
//! The final week is padded with zero-count [`ContributionDay::padding`] days
//! up to Saturday.

use std::collections::BTreeMap;

use chrono::{Duration, Local, NaiveDate, TimeZone};

use crate::error::Result;
use crate::github::EventSource;
use crate::types::{weekday_index, ActivityEvent, ContributionDay, ContributionGrid, ContributionWeek};

/// Days of history covered before week alignment.
pub const WINDOW_DAYS: i64 = 84;

/// First date of the window ending at `today`: 84 days back, then back again
/// to the Sunday on or before that date.
pub fn window_start(today: NaiveDate) -> NaiveDate {
    let back = today - Duration::days(WINDOW_DAYS);
    back - Duration::days(weekday_index(back) as i64)
}

/// Build the contribution grid for the window ending at `today`.
///
/// Event timestamps are converted to `tz` before truncating to a date. Events
/// whose date falls outside `[window_start, today]` are dropped.
pub fn build_grid<Tz: TimeZone>(
    events: &[ActivityEvent],
    today: NaiveDate,
    tz: &Tz,
) -> ContributionGrid {
    let start_date = window_start(today);

    let mut counts: BTreeMap<NaiveDate, u32> = start_date
        .iter_days()
        .take_while(|date| *date <= today)
        .map(|date| (date, 0))
        .collect();

    let mut dropped = 0usize;
    for event in events {
        let units = event.contribution();
        if units == 0 {
            continue;
        }

        let date = event.timestamp.with_timezone(tz).date_naive();
        match counts.get_mut(&date) {
            Some(count) => *count = count.saturating_add(units),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, %start_date, %today, "Dropped events outside the window");
    }

    let mut days: Vec<ContributionDay> = counts
        .into_iter()
        .map(|(date, count)| ContributionDay::new(date, count))
        .collect();

    let mut next = today.succ_opt();
    while days.len() % 7 != 0 {
        let Some(date) = next else { break };
        days.push(ContributionDay::padding(date));
        next = date.succ_opt();
    }

    let total_count = days
        .iter()
        .fold(0u32, |total, day| total.saturating_add(day.count));
    let weeks = days
        .chunks(7)
        .map(|chunk| ContributionWeek {
            days: chunk.to_vec(),
        })
        .collect();

    ContributionGrid {
        weeks,
        total_count,
        start_date,
        end_date: today,
    }
}

/// Fetch events for `username` and build the grid ending today (local time).
///
/// Fails with [`crate::Error::DataSource`] if the source cannot be read; no
/// partial grid is produced.
pub async fn contribution_grid<S>(source: &S, username: &str) -> Result<ContributionGrid>
where
    S: EventSource + ?Sized,
{
    contribution_grid_at(source, username, Local::now().date_naive(), &Local).await
}

/// Same as [`contribution_grid`] with an explicit `today` and time zone.
pub async fn contribution_grid_at<S, Tz>(
    source: &S,
    username: &str,
    today: NaiveDate,
    tz: &Tz,
) -> Result<ContributionGrid>
where
    S: EventSource + ?Sized,
    Tz: TimeZone,
{
    let events = source.fetch_events(username).await?;
    let grid = build_grid(&events, today, tz);

    tracing::info!(
        username,
        events = events.len(),
        weeks = grid.weeks.len(),
        total = grid.total_count,
        "Built contribution grid"
    );

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DataSourceError, Error};
    use crate::types::{is_week_start, ContributionLevel, EventKind};
    use async_trait::async_trait;
    use chrono::{DateTime, FixedOffset, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn push(ts: &str, commits: u32) -> ActivityEvent {
        ActivityEvent {
            kind: EventKind::Push,
            timestamp: at(ts),
            sub_unit_count: Some(commits),
        }
    }

    fn create(ts: &str) -> ActivityEvent {
        ActivityEvent {
            kind: EventKind::Create,
            timestamp: at(ts),
            sub_unit_count: None,
        }
    }

    fn day_of(grid: &ContributionGrid, d: NaiveDate) -> &ContributionDay {
        grid.days().find(|day| day.date == d).unwrap()
    }

    struct FixedSource(Vec<ActivityEvent>);

    #[async_trait]
    impl EventSource for FixedSource {
        async fn fetch_events(
            &self,
            _username: &str,
        ) -> std::result::Result<Vec<ActivityEvent>, DataSourceError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl EventSource for FailingSource {
        async fn fetch_events(
            &self,
            _username: &str,
        ) -> std::result::Result<Vec<ActivityEvent>, DataSourceError> {
            Err(DataSourceError::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_window_start_is_sunday_on_or_before() {
        // 2026-10-19 is a Monday; 84 days earlier is Monday 2026-07-27
        assert_eq!(window_start(date(2026, 10, 19)), date(2026, 7, 26));
        // 2026-10-18 is a Sunday; 84 days earlier is also a Sunday
        assert_eq!(window_start(date(2026, 10, 18)), date(2026, 7, 26));
        // Saturday: 84 days earlier is a Saturday, roll back six days
        assert_eq!(window_start(date(2026, 10, 24)), date(2026, 7, 26));
    }

    #[test]
    fn test_grid_shape() {
        for today in date(2026, 10, 18).iter_days().take(7) {
            let grid = build_grid(&[], today, &Utc);

            assert_eq!(grid.end_date, today);
            assert_eq!(grid.start_date, window_start(today));
            assert!(is_week_start(grid.start_date));
            assert_eq!(grid.weeks.len(), 13, "today {}", today);
            for week in &grid.weeks {
                assert_eq!(week.days.len(), 7);
                assert!(is_week_start(week.days[0].date));
            }

            // Consecutive dates, no gaps
            let dates: Vec<NaiveDate> = grid.days().map(|day| day.date).collect();
            for pair in dates.windows(2) {
                assert_eq!(pair[0].succ_opt().unwrap(), pair[1]);
            }

            // Only dates after today are padding
            for day in grid.days() {
                assert_eq!(day.future, day.date > today);
            }
            assert_eq!(grid.total_count, 0);
        }
    }

    #[test]
    fn test_counts_pushes_and_creates() {
        let today = date(2026, 10, 19);
        let events = vec![
            push("2026-10-19T08:00:00Z", 3),
            push("2026-10-19T12:00:00Z", 5),
            create("2026-10-19T13:00:00Z"),
            create("2026-10-15T13:00:00Z"),
            ActivityEvent {
                kind: EventKind::Other("IssuesEvent".to_string()),
                timestamp: at("2026-10-15T13:00:00Z"),
                sub_unit_count: Some(7),
            },
            ActivityEvent {
                kind: EventKind::Push,
                timestamp: at("2026-10-14T13:00:00Z"),
                sub_unit_count: None,
            },
        ];

        let grid = build_grid(&events, today, &Utc);

        let monday = day_of(&grid, today);
        assert_eq!(monday.count, 9);
        assert_eq!(monday.level, ContributionLevel::High);

        let thursday = day_of(&grid, date(2026, 10, 15));
        assert_eq!(thursday.count, 1);
        assert_eq!(thursday.level, ContributionLevel::Low);

        assert_eq!(day_of(&grid, date(2026, 10, 14)).count, 0);
        assert_eq!(grid.total_count, 10);
    }

    #[test]
    fn test_events_outside_window_are_dropped() {
        let today = date(2026, 10, 19);
        let events = vec![
            push("2026-07-25T12:00:00Z", 4), // day before window start
            push("2026-07-26T12:00:00Z", 2), // window start
            push("2026-10-20T12:00:00Z", 6), // tomorrow (clock skew)
        ];

        let grid = build_grid(&events, today, &Utc);

        assert_eq!(grid.total_count, 2);
        assert_eq!(day_of(&grid, date(2026, 7, 26)).count, 2);
        assert_eq!(day_of(&grid, date(2026, 10, 20)).count, 0);
        assert!(day_of(&grid, date(2026, 10, 20)).future);
    }

    #[test]
    fn test_dates_use_observer_time_zone() {
        let today = date(2026, 10, 19);
        let seoul = FixedOffset::east_opt(9 * 3600).unwrap();
        // 20:00 UTC on the 18th is 05:00 on the 19th in UTC+9
        let events = vec![push("2026-10-18T20:00:00Z", 2)];

        let utc_grid = build_grid(&events, today, &Utc);
        assert_eq!(day_of(&utc_grid, date(2026, 10, 18)).count, 2);

        let local_grid = build_grid(&events, today, &seoul);
        assert_eq!(day_of(&local_grid, date(2026, 10, 18)).count, 0);
        assert_eq!(day_of(&local_grid, date(2026, 10, 19)).count, 2);
    }

    #[test]
    fn test_total_equals_sum_of_days() {
        let today = date(2026, 10, 21);
        let events: Vec<ActivityEvent> = (1..=30)
            .map(|i| push(&format!("2026-09-{:02}T10:00:00Z", i), i % 5))
            .chain((1..=19).map(|i| create(&format!("2026-10-{:02}T10:00:00Z", i))))
            .collect();

        let grid = build_grid(&events, today, &Utc);
        let sum: u32 = grid.days().map(|day| day.count).sum();

        assert_eq!(grid.total_count, sum);
        assert_eq!(sum, (1..=30).map(|i| i % 5).sum::<u32>() + 19);
        for day in grid.days() {
            assert_eq!(day.level, ContributionLevel::from_count(day.count));
        }
    }

    #[test]
    fn test_oversized_push_saturates() {
        let events = crate::github::parse_events(
            r#"[
                {"type": "PushEvent", "created_at": "2026-10-18T09:00:00Z", "payload": {"size": 4294967295}},
                {"type": "CreateEvent", "created_at": "2026-10-18T10:00:00Z", "payload": {}},
                {"type": "PushEvent", "created_at": "2026-10-17T09:00:00Z", "payload": {"size": 2}}
            ]"#,
        )
        .unwrap();

        let grid = build_grid(&events, date(2026, 10, 19), &Utc);

        let sunday = day_of(&grid, date(2026, 10, 18));
        assert_eq!(sunday.count, u32::MAX);
        assert_eq!(sunday.level, ContributionLevel::Max);
        assert_eq!(day_of(&grid, date(2026, 10, 17)).count, 2);
        assert_eq!(grid.total_count, u32::MAX);

        let stats = crate::analytics::contribution_stats(&grid);
        assert_eq!(stats.total_commits, u32::MAX);
        assert_eq!(stats.weekday_totals[0], u32::MAX);
        assert_eq!(stats.most_active_day, "Sun");
    }

    #[tokio::test]
    async fn test_contribution_grid_at_uses_source() {
        let source = FixedSource(vec![push("2026-10-19T08:00:00Z", 12)]);
        let today = date(2026, 10, 19);

        let grid = contribution_grid_at(&source, "octocat", today, &Utc)
            .await
            .unwrap();

        assert_eq!(grid.total_count, 12);
        assert_eq!(day_of(&grid, today).level, ContributionLevel::Max);
    }

    #[tokio::test]
    async fn test_source_failure_yields_no_grid() {
        let result = contribution_grid(&FailingSource, "octocat").await;

        match result {
            Err(Error::DataSource(DataSourceError::Status { status, .. })) => {
                assert_eq!(status, 503)
            }
            other => panic!("expected data source error, got {:?}", other),
        }
    }
}
