//! Capacity and risk analysis.
//!
//! Scans placed lanes once and reports risks as warning codes. Stateless;
//! the lanes are not modified.
//!
//! | Code | Fires when |
//! |------|-----------|
//! | `oven_overbooked` | two start-adjacent oven tasks overlap |
//! | `all_oven_no_prep` | oven work, no prep lane, oven starts < 30 min before serve |
//! | `prep_window_too_short` | prep minutes > 90% of (serve − earliest prep start) |
//! | `capacity_overload` | stove tasks > burners and overlapping stove pairs ≥ burners |
//! | `too_many_projects` | more than 20 tasks in total |

use chrono::{DateTime, TimeDelta, Utc};

use crate::models::{KitchenProfile, ScheduleLane, ScheduledTask, Station, WarningCode};

/// Oven lead below which an oven-only plan is flagged (minutes).
pub const MIN_OVEN_LEAD_MINUTES: i64 = 30;

/// Share of the prep window prep work may fill before it is flagged.
pub const PREP_WINDOW_FILL_RATIO: f64 = 0.9;

/// Task count above which a plan is flagged as too ambitious.
pub const MAX_TASKS: usize = 20;

/// Analyzes placed lanes and returns de-duplicated warning codes.
pub fn analyze(
    lanes: &[ScheduleLane],
    serve_time: DateTime<Utc>,
    profile: Option<&KitchenProfile>,
) -> Vec<WarningCode> {
    let mut warnings = Vec::new();

    let oven = non_empty_lane(lanes, &Station::Oven);
    let prep = non_empty_lane(lanes, &Station::Prep);

    if let Some(oven) = oven {
        let oven_tasks = sorted_by_start(&oven.tasks);

        // One oven: any overlap is a conflict.
        if count_adjacent_overlaps(&oven_tasks) > 0 {
            warnings.push(WarningCode::OvenOverbooked);
        }

        if prep.is_none() {
            let lead = serve_time - oven_tasks[0].start_time;
            if lead < TimeDelta::minutes(MIN_OVEN_LEAD_MINUTES) {
                warnings.push(WarningCode::AllOvenNoPrep);
            }
        }
    }

    if let Some(prep) = prep {
        if prep_window_too_short(prep, serve_time) {
            warnings.push(WarningCode::PrepWindowTooShort);
        }
    }

    if let Some(burners) = profile.and_then(KitchenProfile::burners) {
        if stove_overloaded(lanes, burners as usize) {
            warnings.push(WarningCode::CapacityOverload);
        }
    }

    let total: usize = lanes.iter().map(|l| l.tasks.len()).sum();
    if total > MAX_TASKS {
        warnings.push(WarningCode::TooManyProjects);
    }

    dedup_preserving_order(warnings)
}

/// Number of start-adjacent pairs whose intervals overlap.
///
/// `tasks` must be sorted by start time.
pub fn count_adjacent_overlaps(tasks: &[&ScheduledTask]) -> usize {
    tasks
        .windows(2)
        .filter(|pair| pair[0].end_time > pair[1].start_time)
        .count()
}

fn non_empty_lane<'a>(lanes: &'a [ScheduleLane], station: &Station) -> Option<&'a ScheduleLane> {
    lanes
        .iter()
        .find(|l| &l.station == station)
        .filter(|l| !l.is_empty())
}

fn sorted_by_start(tasks: &[ScheduledTask]) -> Vec<&ScheduledTask> {
    let mut sorted: Vec<&ScheduledTask> = tasks.iter().collect();
    sorted.sort_by_key(|t| t.start_time);
    sorted
}

fn prep_window_too_short(prep: &ScheduleLane, serve_time: DateTime<Utc>) -> bool {
    let Some(earliest) = prep.earliest_start() else {
        return false;
    };
    let total = prep.busy_minutes() as f64;
    let window = (serve_time - earliest).num_minutes() as f64;
    total > window * PREP_WINDOW_FILL_RATIO
}

fn stove_overloaded(lanes: &[ScheduleLane], burners: usize) -> bool {
    let Some(stove) = non_empty_lane(lanes, &Station::Stove) else {
        return false;
    };
    if stove.tasks.len() <= burners {
        return false;
    }
    count_adjacent_overlaps(&sorted_by_start(&stove.tasks)) >= burners
}

fn dedup_preserving_order(warnings: Vec<WarningCode>) -> Vec<WarningCode> {
    let mut seen = Vec::with_capacity(warnings.len());
    for w in warnings {
        if !seen.contains(&w) {
            seen.push(w);
        }
    }
    seen
}
