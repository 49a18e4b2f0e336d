//! End-to-end planning scenarios.

use chrono::NaiveDate;
use workplan::models::{Person, Task, TaskStatus, Workspace};
use workplan::{
    clean_orphan_blocks, estimated_end_date, schedule_for_person, validate_planning_integrity,
    Planner,
};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
}

fn plan(ws: &Workspace) -> Workspace {
    Planner::new().generate_schedule_from(ws, d(17)).unwrap()
}

fn hours_by_date(ws: &Workspace, person_id: &str) -> Vec<(NaiveDate, f64)> {
    schedule_for_person(ws, person_id)
        .iter()
        .map(|b| (b.date, b.hours_planned))
        .collect()
}

#[test]
fn single_task_fits_in_one_day() {
    let ws = Workspace::new()
        .with_person(Person::new("P1").with_hours_per_day(8.0))
        .with_task(Task::new("T1", "PRJ").with_cost(6.0).assigned_to("P1"));

    assert_eq!(hours_by_date(&plan(&ws), "P1"), vec![(d(17), 6.0)]);
}

#[test]
fn long_task_is_split_over_consecutive_days() {
    let ws = Workspace::new()
        .with_person(Person::new("P1").with_hours_per_day(6.0))
        .with_task(Task::new("T1", "PRJ").with_cost(20.0).assigned_to("P1"));

    assert_eq!(
        hours_by_date(&plan(&ws), "P1"),
        vec![(d(17), 6.0), (d(18), 6.0), (d(19), 6.0), (d(20), 2.0)]
    );
}

#[test]
fn higher_priority_task_completes_first() {
    let ws = Workspace::new()
        .with_person(Person::new("P1").with_hours_per_day(8.0))
        .with_task(Task::new("low", "PRJ").with_cost(5.0).assigned_to("P1").with_priority(2))
        .with_task(Task::new("high", "PRJ").with_cost(10.0).assigned_to("P1").with_priority(1));

    let planned = plan(&ws);
    let high_end = planned.planning.task_end_date("high").unwrap();
    let low_blocks = planned.planning.blocks_for_task("low");
    assert!(!low_blocks.is_empty());
    assert!(low_blocks.iter().all(|b| b.date >= high_end));

    let first_low = planned
        .planning
        .schedule_blocks
        .iter()
        .position(|b| b.task_id == "low")
        .unwrap();
    let last_high = planned
        .planning
        .schedule_blocks
        .iter()
        .rposition(|b| b.task_id == "high")
        .unwrap();
    assert!(last_high < first_low);
}

#[test]
fn unassigned_task_gets_no_blocks() {
    let ws = Workspace::new()
        .with_person(Person::new("P1"))
        .with_task(Task::new("T1", "PRJ").with_cost(40.0));

    assert!(plan(&ws).planning.is_empty());
}

#[test]
fn completed_task_gets_no_blocks() {
    let ws = Workspace::new().with_person(Person::new("P1")).with_task(
        Task::new("T1", "PRJ")
            .with_cost(10.0)
            .with_done(2.0)
            .assigned_to("P1")
            .with_status(TaskStatus::Completed),
    );

    assert!(plan(&ws).planning.is_empty());
}

#[test]
fn small_tasks_pack_into_one_day() {
    for (first, second) in [(1, 2), (2, 1), (1, 1)] {
        let ws = Workspace::new()
            .with_person(Person::new("P1").with_hours_per_day(8.0))
            .with_task(Task::new("A", "PRJ").with_cost(4.0).assigned_to("P1").with_priority(first))
            .with_task(Task::new("B", "PRJ").with_cost(4.0).assigned_to("P1").with_priority(second));

        let planned = plan(&ws);
        let blocks = schedule_for_person(&planned, "P1");
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.date == d(17)));
        assert!((planned.planning.hours_on("P1", d(17)) - 8.0).abs() < 1e-10);
    }
}

#[test]
fn stale_planning_is_detected_and_cleaned() {
    let planned = Workspace::new()
        .with_person(Person::new("P1"))
        .with_person(Person::new("P2"))
        .with_task(Task::new("T1", "PRJ").with_cost(12.0).assigned_to("P1"))
        .with_task(Task::new("T2", "PRJ").with_cost(4.0).assigned_to("P2"))
        .with_task(Task::new("T3", "PRJ").with_cost(4.0).assigned_to("P1"));
    let planned = plan(&planned);
    assert!(validate_planning_integrity(&planned).is_valid);

    // Entities change without regeneration
    let mut stale = planned.clone();
    stale.people[1].active = false;
    stale.tasks[0].assignee_id = Some("P2".into());
    stale.tasks[2].status = TaskStatus::Completed;

    let report = validate_planning_integrity(&stale);
    assert!(!report.is_valid);
    assert_eq!(report.issues.len(), stale.planning.block_count());

    let cleaned = clean_orphan_blocks(&stale).unwrap();
    assert!(validate_planning_integrity(&cleaned).is_valid);
    assert!(cleaned.planning.is_empty());
    assert_eq!(estimated_end_date(&cleaned, "P1"), None);
}

#[test]
fn regeneration_after_change_is_consistent() {
    let base = Workspace::new()
        .with_person(Person::new("P1").with_hours_per_day(8.0))
        .with_task(Task::new("T1", "PRJ").with_cost(16.0).assigned_to("P1"));
    let planned = plan(&base);
    assert_eq!(estimated_end_date(&planned, "P1"), Some(d(18)));

    let mut progressed = planned.clone();
    progressed.tasks[0].done_hours = 12.0;
    assert!(progressed.scheduling_inputs_changed(&planned));

    let replanned = plan(&progressed);
    assert_eq!(hours_by_date(&replanned, "P1"), vec![(d(17), 4.0)]);
    assert!(validate_planning_integrity(&replanned).is_valid);
}
