//! Formatting helpers shared across front ends.

/// Format seconds as a `MM:SS` countdown (minutes are not capped at 59).
pub fn format_countdown(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Format a day count with the right plural (e.g., "1 day", "12 days").
pub fn format_days(days: i64) -> String {
    if days.abs() == 1 {
        format!("{} day", days)
    } else {
        format!("{} days", days)
    }
}

/// Render a 0-100 percentage as a fixed-width bar, e.g. `[#####.....]`.
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}
