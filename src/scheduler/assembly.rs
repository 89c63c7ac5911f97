//! Schedule assembly.
//!
//! Orders lanes for presentation (station priority, then name), writes
//! the summary note, and attaches the warnings.

use chrono::{DateTime, Utc};

use crate::models::{lane_order, Schedule, ScheduleLane, WarningCode};

/// Note attached to a schedule built from no tasks.
pub const NO_TASKS_NOTE: &str = "No tasks to schedule";

/// Summary note for a non-empty schedule.
pub fn summary_note(task_count: usize, lane_count: usize) -> String {
    format!("Scheduled {task_count} tasks across {lane_count} stations")
}

/// Packages placed lanes and warnings into a schedule.
pub fn assemble(
    serve_time: DateTime<Utc>,
    mut lanes: Vec<ScheduleLane>,
    warnings: Vec<WarningCode>,
) -> Schedule {
    lanes.sort_by(|a, b| lane_order(&a.station, &b.station));
    let task_count: usize = lanes.iter().map(|l| l.tasks.len()).sum();

    Schedule {
        serve_time,
        notes: Some(summary_note(task_count, lanes.len())),
        lanes,
        warnings,
    }
}
