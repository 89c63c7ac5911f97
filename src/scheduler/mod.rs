//! Backward scheduler, risk analysis, and KPI evaluation.
//!
//! # Algorithm
//!
//! `BackwardScheduler` anchors oven and stove work at serve time and pushes
//! prep-tier work earlier, walking each station's tasks backward in input
//! order. It does not pack intervals or resolve dependencies; the analyzer
//! reports the conflicts that sequential placement can leave behind.
//!
//! # Pipeline
//!
//! placement ([`BackwardScheduler`]) → risk scan ([`analyze`]) →
//! packaging ([`assemble`]) → optional summary ([`ScheduleKpi`]).

mod analyzer;
mod assembly;
mod backward;
mod kpi;

pub use analyzer::{
    analyze, count_adjacent_overlaps, MAX_TASKS, MIN_OVEN_LEAD_MINUTES, PREP_WINDOW_FILL_RATIO,
};
pub use assembly::{assemble, summary_note, NO_TASKS_NOTE};
pub use backward::{
    build_schedule, place_backward, BackwardScheduler, ScheduleRequest,
    DEFAULT_ANCHOR_LEAD_MINUTES,
};
pub use kpi::{peak_concurrency, ScheduleKpi};
