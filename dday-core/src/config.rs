//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/dday/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/dday/` (~/.config/dday/)
//! - State/Logs: `$XDG_STATE_HOME/dday/` (~/.local/state/dday/)

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// GitHub events source
    #[serde(default)]
    pub github: GitHubConfig,

    /// Service period dates (optional until set)
    #[serde(default)]
    pub service: ServiceConfig,

    /// Pomodoro durations
    #[serde(default)]
    pub pomodoro: PomodoroConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GitHub events API configuration
#[derive(Debug, Deserialize, Clone)]
pub struct GitHubConfig {
    /// Default identity whose contributions are shown
    pub username: Option<String>,

    /// API base URL (override for GitHub Enterprise or tests)
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Personal access token; raises the unauthenticated rate limit
    pub token: Option<String>,

    /// Events requested per call (max 100)
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// HTTP request timeout in seconds
    #[serde(default = "default_github_timeout")]
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            username: None,
            api_base: default_api_base(),
            token: None,
            per_page: default_per_page(),
            timeout_secs: default_github_timeout(),
        }
    }
}

impl GitHubConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.api_base.trim().is_empty() {
            return Err(Error::Config("github.api_base must not be empty".to_string()));
        }
        if self.per_page == 0 || self.per_page > 100 {
            return Err(Error::Config(
                "github.per_page must be between 1 and 100".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config(
                "github.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u32 {
    100
}

fn default_github_timeout() -> u64 {
    10
}

/// Service period dates
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ServiceConfig {
    /// First day of service
    pub entry_date: Option<NaiveDate>,
    /// Last day of service
    pub discharge_date: Option<NaiveDate>,
}

/// Pomodoro durations in minutes
#[derive(Debug, Deserialize, Clone)]
pub struct PomodoroConfig {
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,

    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,

    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
        }
    }
}

/// Longest configurable pomodoro duration (one day).
pub const MAX_POMODORO_MINUTES: u32 = 24 * 60;

impl PomodoroConfig {
    pub fn validate(&self) -> Result<()> {
        let durations = [
            ("focus_minutes", self.focus_minutes),
            ("short_break_minutes", self.short_break_minutes),
            ("long_break_minutes", self.long_break_minutes),
        ];
        for (name, minutes) in durations {
            if minutes == 0 || minutes > MAX_POMODORO_MINUTES {
                return Err(Error::Config(format!(
                    "pomodoro.{} must be between 1 and {}",
                    name, MAX_POMODORO_MINUTES
                )));
            }
        }
        Ok(())
    }
}

fn default_focus_minutes() -> u32 {
    25
}

fn default_short_break_minutes() -> u32 {
    5
}

fn default_long_break_minutes() -> u32 {
    15
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.github.validate()?;
        config.pomodoro.validate()?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/dday/config.toml` (~/.config/dday/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("dday").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/dday/` (~/.local/state/dday/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("dday")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/dday/dday.log` (~/.local/state/dday/dday.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("dday.log")
    }
}
