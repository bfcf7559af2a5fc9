//! `dday contributions` - contribution calendar and statistics.

use std::fmt::{self, Write as _};

use anyhow::{Context, Result};
use dday_core::analytics::{contribution_grid, contribution_stats};
use dday_core::format::format_days;
use dday_core::{
    weekday_name, Config, ContributionDay, ContributionGrid, ContributionLevel, ContributionStats,
    GitHubClient,
};

pub fn run(
    config: &Config,
    username: Option<String>,
    api_base: Option<String>,
    export: Option<&str>,
) -> Result<()> {
    let username = username
        .or_else(|| config.github.username.clone())
        .context("no GitHub username given; pass one or set github.username in config.toml")?;

    // Reject unknown formats before touching the network
    if let Some(other) = export.filter(|format| !matches!(*format, "json" | "md")) {
        anyhow::bail!("Unknown export format: {}. Use 'md' or 'json'", other);
    }

    let mut github = config.github.clone();
    if let Some(api_base) = api_base {
        github.api_base = api_base;
    }
    let client = GitHubClient::new(github).context("failed to create GitHub client")?;

    let grid = crate::runtime()?
        .block_on(contribution_grid(&client, &username))
        .context("failed to load GitHub contributions")?;
    let stats = contribution_stats(&grid);

    match export {
        Some("json") => print_json(&username, &grid, &stats)?,
        Some(_) => print!("{}", render_markdown(&username, &grid, &stats)?),
        None => print!("{}", render_terminal(&username, &grid, &stats)?),
    }

    Ok(())
}

fn level_glyph(day: &ContributionDay) -> char {
    if day.future {
        return ' ';
    }
    match day.level {
        ContributionLevel::None => '·',
        ContributionLevel::Low => '░',
        ContributionLevel::Medium => '▒',
        ContributionLevel::High => '▓',
        ContributionLevel::Max => '█',
    }
}

/// Seven rows (Sunday first), one column per week.
fn render_heatmap(grid: &ContributionGrid) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for weekday in 0..7 {
        let label = match weekday {
            1 | 3 | 5 => weekday_name(weekday),
            _ => "",
        };
        let cells: String = grid
            .weeks
            .iter()
            .filter_map(|week| week.days.get(weekday))
            .map(|day| format!("{} ", level_glyph(day)))
            .collect();
        writeln!(out, "   {:<4}{}", label, cells.trim_end())?;
    }
    Ok(out)
}

pub fn render_terminal(
    username: &str,
    grid: &ContributionGrid,
    stats: &ContributionStats,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let title = format!("{} · last 12 weeks", username);

    writeln!(out)?;
    writeln!(out, "╭{}╮", "─".repeat(50))?;
    writeln!(out, "│{:^50}│", title)?;
    writeln!(out, "╰{}╯", "─".repeat(50))?;
    writeln!(out, "   {} → {}", grid.start_date, grid.end_date)?;
    writeln!(out)?;

    out.push_str(&render_heatmap(grid)?);
    writeln!(out, "       Less · ░ ▒ ▓ █ More")?;
    writeln!(out)?;

    writeln!(out, "STATS")?;
    writeln!(out, "   Total:    {} contributions", stats.total_commits)?;
    writeln!(
        out,
        "   Current:  {} (longest {})",
        format_days(stats.current_streak as i64),
        format_days(stats.longest_streak as i64)
    )?;
    writeln!(out, "   Average:  {:.1} per day", stats.average_per_day)?;
    writeln!(out, "   Busiest:  {}", stats.most_active_day)?;
    writeln!(
        out,
        "   Active:   {} of {} days ({:.0}%)",
        stats.active_days,
        stats.total_days,
        stats.activity_percentage()
    )?;
    writeln!(out)?;
    Ok(out)
}

pub fn render_markdown(
    username: &str,
    grid: &ContributionGrid,
    stats: &ContributionStats,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "# Contributions: {}", username)?;
    writeln!(out)?;
    writeln!(out, "*{} to {}*", grid.start_date, grid.end_date)?;
    writeln!(out)?;
    writeln!(out, "```")?;
    out.push_str(&render_heatmap(grid)?);
    writeln!(out, "```")?;
    writeln!(out)?;

    writeln!(out, "| Metric | Value |")?;
    writeln!(out, "|--------|-------|")?;
    writeln!(out, "| Total contributions | {} |", stats.total_commits)?;
    writeln!(out, "| Current streak | {} |", format_days(stats.current_streak as i64))?;
    writeln!(out, "| Longest streak | {} |", format_days(stats.longest_streak as i64))?;
    writeln!(out, "| Average per day | {:.1} |", stats.average_per_day)?;
    writeln!(out, "| Most active day | {} |", stats.most_active_day)?;
    writeln!(out)?;

    writeln!(out, "## By Weekday")?;
    writeln!(out)?;
    for (day, total) in stats.weekday_totals.iter().enumerate() {
        writeln!(out, "- **{}:** {}", weekday_name(day), total)?;
    }
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out, "*Generated by dday*")?;
    Ok(out)
}

fn print_json(username: &str, grid: &ContributionGrid, stats: &ContributionStats) -> Result<()> {
    let json = serde_json::json!({
        "username": username,
        "grid": grid,
        "stats": stats,
    });

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
