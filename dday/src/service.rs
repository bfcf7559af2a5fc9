//! `dday service` - D-day countdown.

use std::fmt::{self, Write as _};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use dday_core::format::{format_days, progress_bar};
use dday_core::{Config, DDayInfo, ServicePeriod};

pub fn run(
    config: &Config,
    entry: Option<NaiveDate>,
    discharge: Option<NaiveDate>,
    today: Option<NaiveDate>,
    export: Option<&str>,
) -> Result<()> {
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    // Dates typed on the command line are checked like a new enlistment;
    // configured dates may describe a period that already ended.
    let period = match (entry, discharge) {
        (Some(entry), Some(discharge)) => ServicePeriod::for_enlistment(entry, discharge, today),
        _ => ServicePeriod::from_dates(
            entry.or(config.service.entry_date),
            discharge.or(config.service.discharge_date),
        ),
    }
    .context("failed to resolve service period (set service.entry_date and service.discharge_date in config.toml)")?;

    let info = period.dday(today);
    tracing::debug!(dday = info.dday_count, progress = info.progress_percentage, "Computed D-day");

    match export {
        Some("json") => println!("{}", serde_json::to_string_pretty(&info)?),
        Some(other) => anyhow::bail!("Unknown export format: {}. Use 'json'", other),
        None => print!("{}", render_terminal(&info)?),
    }

    Ok(())
}

pub fn render_terminal(info: &DDayInfo) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let caption = if info.is_discharged() {
        "since discharge"
    } else {
        "until discharge"
    };

    writeln!(out)?;
    writeln!(out, "   {}  ({}, {})", info.label(), caption, info.urgency().as_str())?;
    writeln!(out)?;
    writeln!(
        out,
        "   Progress   {} {:.1}%",
        progress_bar(info.progress_percentage, 30),
        info.progress_percentage
    )?;
    writeln!(out, "   Served:    {}", format_days(info.service_days))?;
    writeln!(out, "   Total:     {}", format_days(info.total_service_days))?;
    writeln!(out, "   Remaining: {}", format_days(info.remaining_days))?;
    writeln!(out, "   Entry:     {}", info.entry_date.format("%b %d, %Y"))?;
    writeln!(out, "   Discharge: {}", info.discharge_date.format("%b %d, %Y"))?;
    writeln!(out)?;
    Ok(out)
}
