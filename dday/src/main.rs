//! dday - service-period dashboard
//!
//! This tool provides commands for:
//! - Showing the GitHub contribution calendar and streak statistics
//! - Showing the D-day countdown for the configured service period
//! - Running a pomodoro focus timer
//!
//! Uses XDG Base Directory specification for file locations:
//! - Config: $XDG_CONFIG_HOME/dday/config.toml (~/.config/dday/config.toml)
//! - Logs: $XDG_STATE_HOME/dday/dday.log (~/.local/state/dday/dday.log)

mod contributions;
mod pomodoro;
mod service;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dday_core::{Config, TimerMode};

#[derive(Parser)]
#[command(name = "dday")]
#[command(about = "Service-period dashboard: D-day countdown, contribution calendar, pomodoro")]
#[command(version)]
struct Args {
    /// Write logs to the state directory
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the last 12 weeks of GitHub contributions
    Contributions {
        /// GitHub username (default: github.username from config)
        username: Option<String>,

        /// Override the GitHub API base URL
        #[arg(long)]
        api_base: Option<String>,

        /// Export format (md = markdown, json = JSON)
        #[arg(long)]
        export: Option<String>,
    },

    /// Show the D-day countdown for the service period
    Service {
        /// Entry date (YYYY-MM-DD); overrides service.entry_date
        #[arg(long)]
        entry: Option<NaiveDate>,

        /// Discharge date (YYYY-MM-DD); overrides service.discharge_date
        #[arg(long)]
        discharge: Option<NaiveDate>,

        /// Evaluate as of this date instead of today
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Export format (json = JSON)
        #[arg(long)]
        export: Option<String>,
    },

    /// Run a pomodoro countdown (Ctrl-C to stop)
    Pomodoro {
        /// Timer mode: focus, short-break, long-break
        #[arg(short, long, default_value = "focus")]
        mode: TimerMode,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;

    let _log_guard = if args.verbose {
        let guard =
            dday_core::logging::init(&config.logging).context("failed to initialize logging")?;
        eprintln!("Logging to {}", dday_core::logging::log_file_path().display());
        Some(guard)
    } else {
        None
    };

    match args.command {
        Command::Contributions {
            username,
            api_base,
            export,
        } => contributions::run(&config, username, api_base, export.as_deref()),
        Command::Service {
            entry,
            discharge,
            today,
            export,
        } => service::run(&config, entry, discharge, today, export.as_deref()),
        Command::Pomodoro { mode } => pomodoro::run(&config, mode),
    }
}

/// Single-threaded runtime for the one request a command makes.
fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create runtime")
}
