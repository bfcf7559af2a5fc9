//! `dday pomodoro` - countdown in the terminal.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use dday_core::format::progress_bar;
use dday_core::{Config, Pomodoro, TickOutcome, TimerMode};

pub fn run(config: &Config, mode: TimerMode) -> Result<()> {
    let mut timer = Pomodoro::new(config.pomodoro.clone());
    timer.switch_mode(mode);
    timer.toggle();

    tracing::info!(%mode, seconds = timer.time_left(), "Pomodoro started");

    crate::runtime()?.block_on(async {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // First tick completes immediately
        interval.tick().await;
        draw(&timer)?;

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = interval.tick() => match timer.tick() {
                    TickOutcome::Running { .. } => draw(&timer)?,
                    TickOutcome::Finished(mode) => {
                        draw(&timer)?;
                        println!("\n\x07Time's up! {} is over.", mode.display_name());
                        break;
                    }
                    TickOutcome::Idle => break,
                },
                _ = &mut ctrl_c => {
                    println!("\nStopped with {} left.", timer.display());
                    tracing::info!(remaining = timer.time_left(), "Pomodoro interrupted");
                    break;
                }
            }
        }

        Ok::<(), anyhow::Error>(())
    })
}

fn draw(timer: &Pomodoro) -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(
        stdout,
        "\r   {:<12} {}  {}",
        timer.mode().display_name(),
        timer.display(),
        progress_bar(timer.progress() * 100.0, 25)
    )?;
    stdout.flush()?;
    Ok(())
}
