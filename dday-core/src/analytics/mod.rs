//! Analytics module for dday
//!
//! Turns raw activity into the contribution calendar and its summary:
//! - [`contributions`]: event bucketing into a week-aligned day grid
//! - [`stats`]: streaks, weekday totals, and daily average over a grid
//!
//! Both outputs are snapshots rebuilt per query; nothing here is cached.

pub mod contributions;
pub mod stats;

pub use contributions::{
    build_grid, contribution_grid, contribution_grid_at, window_start, WINDOW_DAYS,
};
pub use stats::{calculate_streaks, contribution_stats};
