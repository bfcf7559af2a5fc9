//! Pomodoro timer
//!
//! A one-second-resolution countdown with three modes. The timer never runs
//! on its own: callers drive it with [`Pomodoro::tick`] once per second.

use serde::Serialize;

use crate::config::PomodoroConfig;
use crate::format::format_countdown;

/// Timer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Focus => "focus",
            TimerMode::ShortBreak => "short-break",
            TimerMode::LongBreak => "long-break",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TimerMode::Focus => "Focus time",
            TimerMode::ShortBreak => "Short break",
            TimerMode::LongBreak => "Long break",
        }
    }
}

impl std::str::FromStr for TimerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "focus" => Ok(TimerMode::Focus),
            "short-break" | "short_break" | "short" => Ok(TimerMode::ShortBreak),
            "long-break" | "long_break" | "long" => Ok(TimerMode::LongBreak),
            _ => Err(format!("unknown timer mode: {}", s)),
        }
    }
}

impl std::fmt::Display for TimerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of advancing the timer by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is paused or already at zero; nothing changed
    Idle,
    /// One second elapsed, time remains
    Running { remaining: u32 },
    /// This tick reached zero; the timer has stopped
    Finished(TimerMode),
}

/// Countdown state for one pomodoro session.
#[derive(Debug, Clone)]
pub struct Pomodoro {
    config: PomodoroConfig,
    mode: TimerMode,
    time_left: u32,
    running: bool,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(PomodoroConfig::default())
    }
}

impl Pomodoro {
    /// A stopped timer in focus mode.
    pub fn new(config: PomodoroConfig) -> Self {
        let mut timer = Self {
            config,
            mode: TimerMode::Focus,
            time_left: 0,
            running: false,
        };
        timer.time_left = timer.duration_of(TimerMode::Focus);
        timer
    }

    /// Full length of `mode` in seconds.
    pub fn duration_of(&self, mode: TimerMode) -> u32 {
        let minutes = match mode {
            TimerMode::Focus => self.config.focus_minutes,
            TimerMode::ShortBreak => self.config.short_break_minutes,
            TimerMode::LongBreak => self.config.long_break_minutes,
        };
        minutes.saturating_mul(60)
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Change mode: restores the full duration and stops the timer.
    pub fn switch_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.time_left = self.duration_of(mode);
        self.running = false;
    }

    /// Start or pause.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Stop and restore the current mode's full duration.
    pub fn reset(&mut self) {
        self.running = false;
        self.time_left = self.duration_of(self.mode);
    }

    /// Advance one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running || self.time_left == 0 {
            return TickOutcome::Idle;
        }

        self.time_left -= 1;
        if self.time_left == 0 {
            self.running = false;
            tracing::info!(mode = %self.mode, "Pomodoro finished");
            TickOutcome::Finished(self.mode)
        } else {
            TickOutcome::Running {
                remaining: self.time_left,
            }
        }
    }

    /// Fraction of the current mode elapsed, 0.0 to 1.0.
    pub fn progress(&self) -> f64 {
        let total = self.duration_of(self.mode);
        if total == 0 {
            return 1.0;
        }
        1.0 - self.time_left as f64 / total as f64
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        format_countdown(self.time_left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_config() -> PomodoroConfig {
        PomodoroConfig {
            focus_minutes: 1,
            short_break_minutes: 2,
            long_break_minutes: 3,
        }
    }

    #[test]
    fn test_default_durations() {
        let timer = Pomodoro::default();
        assert_eq!(timer.mode(), TimerMode::Focus);
        assert_eq!(timer.time_left(), 25 * 60);
        assert_eq!(timer.duration_of(TimerMode::ShortBreak), 5 * 60);
        assert_eq!(timer.duration_of(TimerMode::LongBreak), 15 * 60);
        assert!(!timer.is_running());
        assert_eq!(timer.display(), "25:00");
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_tick_requires_running() {
        let mut timer = Pomodoro::new(short_config());
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.time_left(), 60);

        timer.toggle();
        assert_eq!(timer.tick(), TickOutcome::Running { remaining: 59 });
        timer.toggle();
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.time_left(), 59);
    }

    #[test]
    fn test_finishes_and_stops_at_zero() {
        let mut timer = Pomodoro::new(short_config());
        timer.toggle();

        for _ in 0..59 {
            assert!(matches!(timer.tick(), TickOutcome::Running { .. }));
        }
        assert_eq!(timer.tick(), TickOutcome::Finished(TimerMode::Focus));
        assert!(!timer.is_running());
        assert_eq!(timer.time_left(), 0);
        assert_eq!(timer.progress(), 1.0);

        timer.toggle();
        assert_eq!(timer.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_switch_mode_and_reset() {
        let mut timer = Pomodoro::new(short_config());
        timer.toggle();
        timer.tick();

        timer.switch_mode(TimerMode::LongBreak);
        assert_eq!(timer.time_left(), 180);
        assert!(!timer.is_running());

        timer.toggle();
        for _ in 0..90 {
            timer.tick();
        }
        assert_eq!(timer.progress(), 0.5);

        timer.reset();
        assert_eq!(timer.time_left(), 180);
        assert!(!timer.is_running());
        assert_eq!(timer.mode(), TimerMode::LongBreak);
    }

    #[test]
    fn test_oversized_duration_does_not_overflow() {
        let timer = Pomodoro::new(PomodoroConfig {
            focus_minutes: 80_000_000,
            ..short_config()
        });
        assert_eq!(timer.time_left(), u32::MAX);
        assert_eq!(timer.duration_of(TimerMode::ShortBreak), 120);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("focus".parse::<TimerMode>(), Ok(TimerMode::Focus));
        assert_eq!("short-break".parse::<TimerMode>(), Ok(TimerMode::ShortBreak));
        assert_eq!("long".parse::<TimerMode>(), Ok(TimerMode::LongBreak));
        assert!("nap".parse::<TimerMode>().is_err());
        assert_eq!(TimerMode::ShortBreak.to_string(), "short-break");
    }
}
