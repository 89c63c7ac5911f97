//! End-to-end scheduling scenarios.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use u_kitchen::models::{
    AtomicTask, KitchenProfile, Recipe, ScheduleLane, ScheduledTask, Station, WarningCode,
};
use u_kitchen::scheduler::{analyze, BackwardScheduler, ScheduleKpi, ScheduleRequest};
use u_kitchen::validation::validate_recipes;

fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, h, m, 0).unwrap()
}

fn placed(id: &str, station: &str, start: DateTime<Utc>, minutes: u32) -> ScheduledTask {
    let task = AtomicTask::new(id, station, minutes);
    ScheduledTask::place(&task, start, start + TimeDelta::minutes(i64::from(minutes)))
}

fn holiday_menu() -> Vec<Recipe> {
    vec![
        Recipe::new("turkey", "Roast Turkey")
            .with_headcount(10)
            .with_task(AtomicTask::new("turkey-roast", "oven", 180).with_label("Roast turkey"))
            .with_task(AtomicTask::new("turkey-brine", "prep", 20).with_label("Pat dry and season"))
            .with_task(
                AtomicTask::new("turkey-rest", "passive", 30)
                    .with_label("Rest turkey")
                    .with_notes("tent with foil"),
            ),
        Recipe::new("mash", "Mashed Potatoes")
            .with_headcount(10)
            .with_task(AtomicTask::new("mash-peel", "prep", 15).with_label("Peel potatoes"))
            .with_task(
                AtomicTask::new("mash-boil", "stove", 25)
                    .with_label("Boil potatoes")
                    .with_dependency("mash-peel"),
            ),
        Recipe::new("gravy", "Gravy")
            .with_task(AtomicTask::new("gravy-whisk", "stove", 10).with_label("Whisk gravy")),
    ]
}

#[test]
fn scenario_a_one_oven_one_prep() {
    let tasks = vec![
        AtomicTask::new("roast", "oven", 60).with_label("Roast"),
        AtomicTask::new("season", "prep", 30).with_label("Season"),
    ];
    let schedule = BackwardScheduler::new().schedule(&tasks, at(18, 0), None);

    let roast = schedule.find_task("roast").unwrap();
    assert_eq!(roast.start_time, at(17, 0));
    assert_eq!(roast.end_time, at(18, 0));

    let season = schedule.find_task("season").unwrap();
    assert_eq!(season.start_time, at(15, 30));
    assert_eq!(season.end_time, at(16, 0));

    assert!(schedule.warnings.is_empty());
}

#[test]
fn scenario_b_two_oven_tasks() {
    let tasks = vec![
        AtomicTask::new("pie", "oven", 45).with_label("Bake pie"),
        AtomicTask::new("rolls", "oven", 45).with_label("Bake rolls"),
        AtomicTask::new("dough", "prep", 20).with_label("Make dough"),
    ];
    let schedule = BackwardScheduler::new().schedule(&tasks, at(18, 0), None);

    // Sequential placement keeps one station's tasks back to back.
    let oven = schedule.lane(&Station::Oven).unwrap();
    assert_eq!(oven.tasks[0].start_time, at(16, 30));
    assert_eq!(oven.tasks[0].end_time, oven.tasks[1].start_time);
    assert!(!schedule.has_warning(WarningCode::OvenOverbooked));

    // Both anchored at serve time is the conflict the analyzer reports.
    let lanes = vec![
        ScheduleLane::new(
            Station::Oven,
            vec![
                placed("pie", "oven", at(17, 15), 45),
                placed("rolls", "oven", at(17, 15), 45),
            ],
        ),
        ScheduleLane::new(Station::Prep, vec![placed("dough", "prep", at(15, 40), 20)]),
    ];
    assert!(analyze(&lanes, at(18, 0), None).contains(&WarningCode::OvenOverbooked));
}

#[test]
fn scenario_c_too_many_projects() {
    let stations = ["oven", "stove", "prep", "counter", "passive"];
    let tasks: Vec<AtomicTask> = (0..25)
        .map(|i| {
            AtomicTask::new(format!("t{i}"), stations[i % stations.len()], 10)
                .with_label(format!("Step {i}"))
        })
        .collect();
    let schedule = BackwardScheduler::new().schedule(&tasks, at(20, 0), None);

    assert_eq!(schedule.task_count(), 25);
    assert!(schedule.has_warning(WarningCode::TooManyProjects));
}

#[test]
fn scenario_d_capacity_overload() {
    let profile = KitchenProfile::new().with_burners(2);
    let lanes = vec![ScheduleLane::new(
        Station::Stove,
        vec![
            placed("sauce", "stove", at(17, 0), 60),
            placed("pasta", "stove", at(17, 20), 40),
            placed("greens", "stove", at(17, 40), 20),
        ],
    )];
    assert!(analyze(&lanes, at(18, 0), Some(&profile)).contains(&WarningCode::CapacityOverload));
}

#[test]
fn scenario_e_no_tasks() {
    let schedule = BackwardScheduler::new().schedule(&[], at(18, 0), None);
    let json = serde_json::to_value(&schedule).unwrap();

    assert_eq!(json["lanes"], serde_json::json!([]));
    assert_eq!(json["notes"], "No tasks to schedule");
    assert_eq!(json["warnings"], serde_json::json!([]));
}

#[test]
fn determinism() {
    let scheduler = BackwardScheduler::new();
    let profile = KitchenProfile::new().with_burners(4);
    let first = scheduler.schedule_recipes(&holiday_menu(), at(18, 0), Some(&profile));
    let second = scheduler.schedule_recipes(&holiday_menu(), at(18, 0), Some(&profile));

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn high_priority_lanes_end_at_serve_time() {
    let schedule = BackwardScheduler::new().schedule_recipes(&holiday_menu(), at(18, 0), None);
    for station in [Station::Oven, Station::Stove] {
        let lane = schedule.lane(&station).unwrap();
        assert_eq!(lane.tasks.last().unwrap().end_time, at(18, 0));
    }
}

#[test]
fn durations_are_conserved() {
    let recipes = holiday_menu();
    let schedule = BackwardScheduler::new().schedule_recipes(&recipes, at(18, 0), None);

    for recipe in &recipes {
        for task in &recipe.tasks {
            let placed = schedule.find_task(&task.id).unwrap();
            assert_eq!(placed.duration_minutes(), i64::from(task.duration_minutes));
        }
    }
}

#[test]
fn lanes_sorted_and_non_overlapping() {
    let schedule = BackwardScheduler::new().schedule_recipes(&holiday_menu(), at(18, 0), None);

    for lane in &schedule.lanes {
        for pair in lane.tasks.windows(2) {
            assert!(pair[0].start_time <= pair[1].start_time);
            assert!(pair[0].end_time <= pair[1].start_time);
        }
    }
    assert!(schedule.tasks().all(|t| t.end_time <= at(18, 0)));
}

#[test]
fn adding_overlapping_oven_task_only_adds_warnings() {
    let prep = ScheduleLane::new(
        Station::Prep,
        vec![
            placed("chop", "prep", at(17, 0), 30),
            placed("mix", "prep", at(17, 30), 30),
        ],
    );
    let before_lanes = vec![
        ScheduleLane::new(Station::Oven, vec![placed("roast", "oven", at(17, 0), 60)]),
        prep.clone(),
    ];
    let before = analyze(&before_lanes, at(18, 0), None);
    assert!(!before.contains(&WarningCode::OvenOverbooked));
    assert!(before.contains(&WarningCode::PrepWindowTooShort));

    let after_lanes = vec![
        ScheduleLane::new(
            Station::Oven,
            vec![
                placed("roast", "oven", at(17, 0), 60),
                placed("bake", "oven", at(17, 30), 30),
            ],
        ),
        prep,
    ];
    let after = analyze(&after_lanes, at(18, 0), None);
    assert!(after.contains(&WarningCode::OvenOverbooked));
    assert!(before.iter().all(|w| after.contains(w)));
}

#[test]
fn lane_order_and_unknown_station() {
    let tasks = vec![
        AtomicTask::new("smoke", "smoker", 90).with_label("Smoke brisket"),
        AtomicTask::new("slice", "counter", 10).with_label("Slice"),
        AtomicTask::new("sear", "stove", 5).with_label("Sear"),
        AtomicTask::new("bake", "oven", 30).with_label("Bake"),
    ];
    let schedule = BackwardScheduler::new().schedule(&tasks, at(18, 0), None);
    let order: Vec<&str> = schedule.lanes.iter().map(|l| l.station.as_str()).collect();
    assert_eq!(order, vec!["oven", "stove", "counter", "smoker"]);

    // Unknown stations are placed from the anchor like prep work.
    assert_eq!(schedule.find_task("smoke").unwrap().end_time, at(16, 0));
}

#[test]
fn notes_pass_through() {
    let schedule = BackwardScheduler::new().schedule_recipes(&holiday_menu(), at(18, 0), None);
    let rest = schedule.find_task("turkey-rest").unwrap();
    assert_eq!(rest.notes.as_deref(), Some("tent with foil"));
    assert_eq!(rest.label, "Rest turkey");
}

#[test]
fn json_request_round_trip() {
    let body = r#"{
        "serve_time": "2024-01-01T19:00:00Z",
        "recipes": [{
            "id": "r1",
            "title": "Roasted Chicken",
            "headcount": 4,
            "tasks": [
                {"id": "task-1", "label": "Preheat oven", "duration_minutes": 10, "station": "oven"},
                {"id": "task-2", "label": "Season chicken", "duration_minutes": 5, "station": "prep"}
            ]
        }],
        "kitchen_profile": {"oven_capacity_lbs": 20.0, "burner_count": 4}
    }"#;
    let request = ScheduleRequest::from_json(body).unwrap();
    let schedule = BackwardScheduler::new()
        .schedule_validated(&request)
        .unwrap();

    let json = serde_json::to_value(&schedule).unwrap();
    assert_eq!(json["serve_time"], "2024-01-01T19:00:00Z");
    assert_eq!(json["lanes"][0]["station"], "oven");
    assert_eq!(json["lanes"][0]["tasks"][0]["start_time"], "2024-01-01T18:50:00Z");
    assert_eq!(json["lanes"][1]["tasks"][0]["end_time"], "2024-01-01T17:00:00Z");
    assert_eq!(json["notes"], "Scheduled 2 tasks across 2 stations");
}

#[test]
fn kpi_reports_start_time() {
    let schedule = BackwardScheduler::new().schedule_recipes(&holiday_menu(), at(18, 0), None);
    let kpi = ScheduleKpi::calculate(&schedule);

    // Oven starts 15:00; prep walks back 35 minutes from there.
    assert_eq!(kpi.plan_start, Some(at(14, 25)));
    assert_eq!(kpi.lead_time_minutes, 215);
    assert_eq!(kpi.busy_minutes_by_station[&Station::Stove], 35);
    assert_eq!(kpi.task_count, 6);
}

#[test]
fn holiday_menu_is_valid() {
    assert!(validate_recipes(&holiday_menu()).is_ok());
}
