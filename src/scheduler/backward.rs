//! Deadline-anchored backward scheduler.
//!
//! # Algorithm
//!
//! 1. Group tasks by station (first-appearance order).
//! 2. High-priority stations (oven, stove): walk each station's tasks in
//!    input order, ending the first at serve time and each following task
//!    where the previous one started.
//! 3. Anchor = min(earliest high-priority start, serve time − 2h).
//! 4. Low-priority stations (counter, prep, passive, unknown): same walk,
//!    starting from the anchor.
//! 5. Analyze the placed lanes for risks and assemble the schedule.
//!
//! Placement is sequential slot assignment, not interval packing: no task
//! is dropped or moved, and conflicts are reported by the analyzer rather
//! than avoided. `depends_on` is not read.
//!
//! # Complexity
//! O(n + s log s) where n=tasks, s=distinct stations.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::analyzer::analyze;
use super::assembly::{assemble, NO_TASKS_NOTE};
use crate::error::Result;
use crate::models::{
    flatten_recipes, AtomicTask, KitchenProfile, Recipe, Schedule, ScheduleLane, ScheduledTask,
    Station,
};
use crate::validation::validate_tasks;

/// Fallback lead between the prep anchor and serve time (minutes).
pub const DEFAULT_ANCHOR_LEAD_MINUTES: u32 = 120;

/// Input container for one scheduling run.
///
/// Deserializes the request body shape:
/// `{ recipes?, tasks? | recipes_or_tasks?, serve_time, kitchen_profile? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Recipes whose tasks are scheduled first, in order.
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Loose tasks scheduled after the recipes' tasks.
    #[serde(default, alias = "recipes_or_tasks")]
    pub tasks: Vec<AtomicTask>,
    /// The deadline.
    pub serve_time: DateTime<Utc>,
    /// Optional equipment description.
    #[serde(default)]
    pub kitchen_profile: Option<KitchenProfile>,
}

impl ScheduleRequest {
    /// Creates an empty request for a serve time.
    pub fn new(serve_time: DateTime<Utc>) -> Self {
        Self {
            recipes: Vec::new(),
            tasks: Vec::new(),
            serve_time,
            kitchen_profile: None,
        }
    }

    /// Adds a recipe.
    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipes.push(recipe);
        self
    }

    /// Adds loose tasks.
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = AtomicTask>) -> Self {
        self.tasks.extend(tasks);
        self
    }

    /// Sets the kitchen profile.
    pub fn with_kitchen_profile(mut self, profile: KitchenProfile) -> Self {
        self.kitchen_profile = Some(profile);
        self
    }

    /// All tasks to place: recipe tasks first, then loose tasks.
    pub fn all_tasks(&self) -> Vec<AtomicTask> {
        let mut tasks = flatten_recipes(&self.recipes);
        tasks.extend(self.tasks.iter().cloned());
        tasks
    }

    /// Decodes a JSON request body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Backward (deadline-anchored) kitchen scheduler.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use u_kitchen::models::{AtomicTask, Station};
/// use u_kitchen::scheduler::BackwardScheduler;
///
/// let serve = Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap();
/// let tasks = vec![
///     AtomicTask::new("roast", "oven", 60).with_label("Roast chicken"),
///     AtomicTask::new("season", "prep", 30).with_label("Season chicken"),
/// ];
///
/// let schedule = BackwardScheduler::new().schedule(&tasks, serve, None);
/// let roast = schedule.find_task("roast").unwrap();
/// assert_eq!(roast.end_time, serve);
/// assert_eq!(schedule.lanes[0].station, Station::Oven);
/// assert!(schedule.warnings.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BackwardScheduler {
    anchor_lead_minutes: u32,
}

impl BackwardScheduler {
    /// Creates a scheduler with the default 2-hour anchor lead.
    pub fn new() -> Self {
        Self {
            anchor_lead_minutes: DEFAULT_ANCHOR_LEAD_MINUTES,
        }
    }

    /// Overrides the fallback lead between the prep anchor and serve time.
    pub fn with_anchor_lead_minutes(mut self, minutes: u32) -> Self {
        self.anchor_lead_minutes = minutes;
        self
    }

    /// Places every task backward from `serve_time` and analyzes the result.
    ///
    /// Never fails. Infeasible placements (overlaps, early starts) surface
    /// as warning codes on the returned schedule.
    pub fn schedule(
        &self,
        tasks: &[AtomicTask],
        serve_time: DateTime<Utc>,
        profile: Option<&KitchenProfile>,
    ) -> Schedule {
        if tasks.is_empty() {
            info!(event = "schedule_empty", serve_time = %serve_time);
            return Schedule::empty(serve_time, NO_TASKS_NOTE);
        }

        let groups = group_by_station(tasks);
        info!(
            event = "schedule_start",
            serve_time = %serve_time,
            tasks = tasks.len(),
            stations = groups.len(),
        );

        let (high, low): (Vec<_>, Vec<_>) = groups
            .into_iter()
            .partition(|(station, _)| station.is_high_priority());

        let mut lanes = Vec::with_capacity(high.len() + low.len());

        for (station, station_tasks) in high {
            let placed = place_backward(&station_tasks, serve_time);
            debug!(
                event = "lane_placed",
                station = %station,
                tier = "high",
                tasks = placed.len(),
            );
            lanes.push(ScheduleLane::new(station, placed));
        }

        let anchor = anchor_time(
            lanes.iter().filter_map(|l| l.earliest_start()),
            serve_time,
            self.anchor_lead_minutes,
        );
        debug!(event = "anchor", anchor = %anchor);

        for (station, station_tasks) in low {
            let placed = place_backward(&station_tasks, anchor);
            debug!(
                event = "lane_placed",
                station = %station,
                tier = "low",
                tasks = placed.len(),
            );
            lanes.push(ScheduleLane::new(station, placed));
        }

        let warnings = analyze(&lanes, serve_time, profile);
        if !warnings.is_empty() {
            let codes: Vec<&str> = warnings.iter().map(|w| w.as_str()).collect();
            warn!(event = "schedule_warnings", warnings = ?codes);
        }

        let schedule = assemble(serve_time, lanes, warnings);
        info!(
            event = "schedule_end",
            lanes = schedule.lanes.len(),
            tasks = schedule.task_count(),
            warnings = schedule.warnings.len(),
        );
        schedule
    }

    /// Flattens recipes in order and schedules their tasks.
    pub fn schedule_recipes(
        &self,
        recipes: &[Recipe],
        serve_time: DateTime<Utc>,
        profile: Option<&KitchenProfile>,
    ) -> Schedule {
        self.schedule(&flatten_recipes(recipes), serve_time, profile)
    }

    /// Schedules from a request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Schedule {
        self.schedule(
            &request.all_tasks(),
            request.serve_time,
            request.kitchen_profile.as_ref(),
        )
    }

    /// Validates the request's tasks, then schedules them.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Validation`] with every problem found.
    pub fn schedule_validated(&self, request: &ScheduleRequest) -> Result<Schedule> {
        let tasks = request.all_tasks();
        validate_tasks(&tasks)?;
        Ok(self.schedule(&tasks, request.serve_time, request.kitchen_profile.as_ref()))
    }
}

impl Default for BackwardScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Schedules recipes with the default scheduler.
pub fn build_schedule(
    recipes: &[Recipe],
    serve_time: DateTime<Utc>,
    profile: Option<&KitchenProfile>,
) -> Schedule {
    BackwardScheduler::new().schedule_recipes(recipes, serve_time, profile)
}

/// Groups tasks by station, keeping first-appearance order of stations
/// and input order of tasks within each station.
fn group_by_station(tasks: &[AtomicTask]) -> Vec<(Station, Vec<&AtomicTask>)> {
    let mut groups: Vec<(Station, Vec<&AtomicTask>)> = Vec::new();
    for task in tasks {
        match groups.iter_mut().find(|(s, _)| *s == task.station) {
            Some((_, group)) => group.push(task),
            None => groups.push((task.station.clone(), vec![task])),
        }
    }
    groups
}

/// Places tasks one after another, walking backward from `cursor`.
///
/// The first task ends at `cursor`; each following task ends where the
/// previous one started.
pub fn place_backward(tasks: &[&AtomicTask], cursor: DateTime<Utc>) -> Vec<ScheduledTask> {
    tasks
        .iter()
        .scan(cursor, |cursor, task| {
            let end = *cursor;
            let start = minutes_before(end, task.duration_minutes);
            *cursor = start;
            Some(ScheduledTask::place(task, start, end))
        })
        .collect()
}

/// Earliest of the given start times and `serve_time - lead`.
fn anchor_time(
    high_priority_starts: impl Iterator<Item = DateTime<Utc>>,
    serve_time: DateTime<Utc>,
    lead_minutes: u32,
) -> DateTime<Utc> {
    high_priority_starts.fold(minutes_before(serve_time, lead_minutes), |anchor, start| {
        anchor.min(start)
    })
}

/// `time - minutes`, clamped to the earliest representable instant.
fn minutes_before(time: DateTime<Utc>, minutes: u32) -> DateTime<Utc> {
    time.checked_sub_signed(TimeDelta::minutes(i64::from(minutes)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
