//! Schedule (solution) model.
//!
//! A schedule is the per-station timeline produced for one serve time:
//! lanes of timestamped tasks plus advisory warning codes. Schedules are
//! built once per run and not mutated afterward.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AtomicTask, Station, WarningCode};

/// An atomic task placed on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Source task ID.
    pub id: String,
    /// Source task label.
    pub label: String,
    /// Station the task runs at.
    pub station: Station,
    /// Placed start (inclusive).
    pub start_time: DateTime<Utc>,
    /// Placed end (exclusive).
    pub end_time: DateTime<Utc>,
    /// Source task notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// All placed tasks for one station, ascending by start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleLane {
    /// The lane's station.
    pub station: Station,
    /// Tasks sorted by `start_time`.
    pub tasks: Vec<ScheduledTask>,
}

/// A complete cooking timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// The fixed deadline every dish lands on.
    pub serve_time: DateTime<Utc>,
    /// One lane per station present in the input.
    pub lanes: Vec<ScheduleLane>,
    /// Summary note.
    #[serde(default)]
    pub notes: Option<String>,
    /// De-duplicated risk codes.
    #[serde(default)]
    pub warnings: Vec<WarningCode>,
}

impl ScheduledTask {
    /// Places a task on `[start_time, end_time)`.
    pub fn place(task: &AtomicTask, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            id: task.id.clone(),
            label: task.label.clone(),
            station: task.station.clone(),
            start_time,
            end_time,
            notes: task.notes.clone(),
        }
    }

    /// Placed duration in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Whether two placed intervals overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

impl ScheduleLane {
    /// Creates a lane, sorting tasks by start time.
    pub fn new(station: Station, mut tasks: Vec<ScheduledTask>) -> Self {
        tasks.sort_by_key(|t| t.start_time);
        Self { station, tasks }
    }

    /// Earliest start in this lane.
    pub fn earliest_start(&self) -> Option<DateTime<Utc>> {
        self.tasks.iter().map(|t| t.start_time).min()
    }

    /// Sum of task durations (minutes).
    pub fn busy_minutes(&self) -> i64 {
        self.tasks.iter().map(|t| t.duration_minutes()).sum()
    }

    /// Whether the lane has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Schedule {
    /// Creates a schedule with no lanes.
    pub fn empty(serve_time: DateTime<Utc>, notes: impl Into<String>) -> Self {
        Self {
            serve_time,
            lanes: Vec::new(),
            notes: Some(notes.into()),
            warnings: Vec::new(),
        }
    }

    /// The lane for a station, if present.
    pub fn lane(&self, station: &Station) -> Option<&ScheduleLane> {
        self.lanes.iter().find(|l| &l.station == station)
    }

    /// Total placed tasks across lanes.
    pub fn task_count(&self) -> usize {
        self.lanes.iter().map(|l| l.tasks.len()).sum()
    }

    /// Finds a placed task by ID.
    pub fn find_task(&self, task_id: &str) -> Option<&ScheduledTask> {
        self.tasks().find(|t| t.id == task_id)
    }

    /// Iterates every placed task, lane by lane.
    pub fn tasks(&self) -> impl Iterator<Item = &ScheduledTask> {
        self.lanes.iter().flat_map(|l| l.tasks.iter())
    }

    /// When cooking has to begin.
    pub fn earliest_start(&self) -> Option<DateTime<Utc>> {
        self.lanes.iter().filter_map(|l| l.earliest_start()).min()
    }

    /// Whether a warning was raised.
    pub fn has_warning(&self, code: WarningCode) -> bool {
        self.warnings.contains(&code)
    }

    /// Whether the plan raised no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
