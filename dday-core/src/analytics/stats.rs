//! Streak and weekday statistics over a contribution grid.

use crate::types::{weekday_index, weekday_name, ContributionGrid, ContributionStats};

/// Derive summary statistics from a grid.
///
/// Padding days after `end_date` are not observed and are ignored. An empty
/// grid yields all-zero statistics with `most_active_day = "Sun"`.
pub fn contribution_stats(grid: &ContributionGrid) -> ContributionStats {
    let counts: Vec<u32> = grid.observed_days().map(|day| day.count).collect();
    if counts.is_empty() {
        return ContributionStats::default();
    }

    let mut weekday_totals = [0u32; 7];
    for day in grid.observed_days() {
        let total = &mut weekday_totals[weekday_index(day.date)];
        *total = total.saturating_add(day.count);
    }

    let (current_streak, longest_streak) = calculate_streaks(&counts);
    let active_days = counts.iter().filter(|&&count| count > 0).count() as u32;
    let total_days = counts.len() as u32;
    let total_commits = grid.total_count;

    ContributionStats {
        total_commits,
        current_streak,
        longest_streak,
        average_per_day: round_one_decimal(total_commits as f64 / total_days as f64),
        most_active_day: weekday_name(busiest_weekday(&weekday_totals)).to_string(),
        weekday_totals,
        active_days,
        total_days,
    }
}

/// Returns (current_streak, longest_streak) for chronological day counts.
///
/// The current streak is counted backward from the last day. A zero on the
/// last day alone is skipped since today may have no activity yet.
pub fn calculate_streaks(counts: &[u32]) -> (u32, u32) {
    let mut longest_streak = 0u32;
    let mut streak = 0u32;

    for &count in counts {
        if count > 0 {
            streak += 1;
            longest_streak = longest_streak.max(streak);
        } else {
            streak = 0;
        }
    }

    let mut from_latest = counts.iter().rev().peekable();
    if from_latest.peek() == Some(&&0) {
        from_latest.next();
    }
    let current_streak = from_latest.take_while(|&&count| count > 0).count() as u32;

    (current_streak, longest_streak)
}

/// Index of the weekday with the highest total; the earliest index wins ties.
fn busiest_weekday(totals: &[u32; 7]) -> usize {
    let mut best = 0;
    for (day, &total) in totals.iter().enumerate() {
        if total > totals[best] {
            best = day;
        }
    }
    best
}

/// Round half-up to one decimal place.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
