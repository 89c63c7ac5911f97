//! Schedule summary metrics (KPIs).
//!
//! Computes plan-level indicators from a finished schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Plan start | Earliest task start |
//! | Lead time | serve_time − plan start (minutes) |
//! | Busy minutes | Sum of task durations per station |
//! | Peak concurrency | Max tasks running at once per station |

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::{Schedule, ScheduleLane, Station};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Placed tasks across all lanes.
    pub task_count: usize,
    /// Number of lanes.
    pub lane_count: usize,
    /// When the first task starts. `None` for an empty schedule.
    pub plan_start: Option<DateTime<Utc>>,
    /// Minutes from plan start to serve time (0 for an empty schedule).
    pub lead_time_minutes: i64,
    /// Active minutes per station.
    pub busy_minutes_by_station: BTreeMap<Station, i64>,
    /// Maximum simultaneous tasks per station.
    pub peak_concurrency_by_station: BTreeMap<Station, usize>,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let plan_start = schedule.earliest_start();
        let lead_time_minutes = plan_start
            .map(|start| (schedule.serve_time - start).num_minutes())
            .unwrap_or(0);

        let mut busy_minutes_by_station = BTreeMap::new();
        let mut peak_concurrency_by_station = BTreeMap::new();
        for lane in &schedule.lanes {
            *busy_minutes_by_station
                .entry(lane.station.clone())
                .or_insert(0) += lane.busy_minutes();
            let peak = peak_concurrency(lane);
            let entry = peak_concurrency_by_station
                .entry(lane.station.clone())
                .or_insert(0);
            *entry = (*entry).max(peak);
        }

        Self {
            task_count: schedule.task_count(),
            lane_count: schedule.lanes.len(),
            plan_start,
            lead_time_minutes,
            busy_minutes_by_station,
            peak_concurrency_by_station,
        }
    }

    /// Peak concurrency at a station (0 if absent).
    pub fn peak_at(&self, station: &Station) -> usize {
        self.peak_concurrency_by_station
            .get(station)
            .copied()
            .unwrap_or(0)
    }
}

/// Maximum number of tasks in a lane overlapping at any instant.
///
/// # Algorithm
/// Sweep over start (+1) and end (−1) events. Ends sort before starts at
/// the same instant, so back-to-back tasks do not count as concurrent.
pub fn peak_concurrency(lane: &ScheduleLane) -> usize {
    let mut events: Vec<(DateTime<Utc>, i32)> = lane
        .tasks
        .iter()
        .flat_map(|t| [(t.start_time, 1), (t.end_time, -1)])
        .collect();
    events.sort();

    let mut current: i32 = 0;
    let mut peak: i32 = 0;
    for (_, delta) in events {
        current += delta;
        peak = peak.max(current);
    }
    peak as usize
}
