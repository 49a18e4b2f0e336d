//! Randomized invariant checks over generated plannings.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use workplan::models::{Person, Task, TaskStatus, Workspace, HOURS_EPSILON};
use workplan::scheduler::eligibility::is_eligible_task;
use workplan::{clean_orphan_blocks, validate_planning_integrity, Planner};

const SEEDS: u64 = 64;
const TOLERANCE: f64 = 1e-6;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 17).unwrap()
}

fn random_workspace(rng: &mut StdRng) -> Workspace {
    let mut ws = Workspace::new();
    let people = rng.random_range(1..=5);
    for p in 0..people {
        let hours = f64::from(rng.random_range(2..=20_u32)) * 0.5;
        let person = Person::new(format!("P{p}"))
            .with_hours_per_day(hours)
            .with_active(rng.random_bool(0.8));
        ws = ws.with_person(person);
    }

    let tasks = rng.random_range(0..=25);
    for t in 0..tasks {
        let cost = f64::from(rng.random_range(1..=80_u32)) * 0.25;
        let done = cost * f64::from(rng.random_range(0..=4_u32)) / 4.0;
        let status = match rng.random_range(0..10) {
            0 => TaskStatus::Completed,
            1..=3 => TaskStatus::InProgress,
            _ => TaskStatus::Todo,
        };
        let mut task = Task::new(format!("T{t}"), format!("PRJ{}", t % 3))
            .with_cost(cost)
            .with_done(done)
            .with_status(status)
            .with_priority(rng.random_range(0..4));
        if rng.random_bool(0.85) {
            // Occasionally point at someone who does not exist
            task = task.assigned_to(format!("P{}", rng.random_range(0..=people)));
        }
        ws = ws.with_task(task);
    }
    ws
}

fn for_each_planned(mut check: impl FnMut(&Workspace, &Workspace)) {
    let planner = Planner::new();
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let ws = random_workspace(&mut rng);
        let planned = planner.generate_schedule_from(&ws, start()).unwrap();
        check(&ws, &planned);
    }
}

#[test]
fn blocks_have_positive_hours_on_working_days() {
    for_each_planned(|_, planned| {
        for block in &planned.planning.schedule_blocks {
            assert!(block.hours_planned > HOURS_EPSILON);
            assert!(!matches!(block.date.weekday(), Weekday::Sat | Weekday::Sun));
            assert!(block.date >= start());
        }
    });
}

#[test]
fn daily_capacity_is_respected() {
    for_each_planned(|ws, planned| {
        let mut load: HashMap<(&str, NaiveDate), f64> = HashMap::new();
        for block in &planned.planning.schedule_blocks {
            *load.entry((block.person_id.as_str(), block.date)).or_insert(0.0) +=
                block.hours_planned;
        }
        for ((person_id, _), hours) in load {
            let capacity = ws.person(person_id).unwrap().hours_per_day;
            assert!(hours <= capacity + TOLERANCE, "{person_id}: {hours} > {capacity}");
        }
    });
}

#[test]
fn eligible_tasks_are_fully_planned_in_date_order() {
    for_each_planned(|ws, planned| {
        for task in &ws.tasks {
            let blocks = planned.planning.blocks_for_task(&task.id);
            let assignee_active = task
                .assignee_id
                .as_deref()
                .and_then(|id| ws.person(id))
                .is_some_and(|p| p.active);

            if is_eligible_task(task) && assignee_active {
                let total: f64 = blocks.iter().map(|b| b.hours_planned).sum();
                assert!((total - task.pending_hours()).abs() < TOLERANCE);
                assert!(blocks.windows(2).all(|w| w[0].date <= w[1].date));
                assert!(blocks
                    .iter()
                    .all(|b| Some(b.person_id.as_str()) == task.assignee_id.as_deref()));
                assert!(blocks.iter().all(|b| b.project_id == task.project_id));
            } else {
                assert!(blocks.is_empty(), "task {} should not be planned", task.id);
            }
        }
    });
}

#[test]
fn generation_is_idempotent() {
    let planner = Planner::new();
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let ws = random_workspace(&mut rng);
        let a = planner.generate_schedule_from(&ws, start()).unwrap();
        let b = planner.generate_schedule_from(&a, start()).unwrap();
        assert_eq!(
            serde_json::to_string(&a.planning.schedule_blocks).unwrap(),
            serde_json::to_string(&b.planning.schedule_blocks).unwrap()
        );
    }
}

#[test]
fn generated_planning_is_valid_and_cleanup_is_noop() {
    for_each_planned(|_, planned| {
        assert!(validate_planning_integrity(planned).is_valid);
        let cleaned = clean_orphan_blocks(planned).unwrap();
        assert_eq!(cleaned.planning, planned.planning);
    });
}

#[test]
fn cleanup_after_random_mutation_is_orphan_free() {
    let planner = Planner::new();
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let ws = random_workspace(&mut rng);
        let mut mutated = planner.generate_schedule_from(&ws, start()).unwrap();

        for person in &mut mutated.people {
            if rng.random_bool(0.3) {
                person.active = !person.active;
            }
        }
        for task in &mut mutated.tasks {
            match rng.random_range(0..6) {
                0 => task.status = TaskStatus::Completed,
                1 => task.assignee_id = None,
                2 => task.assignee_id = Some("P0".into()),
                _ => {}
            }
        }
        if rng.random_bool(0.3) && !mutated.tasks.is_empty() {
            mutated.tasks.remove(0);
        }

        let cleaned = clean_orphan_blocks(&mutated).unwrap();
        assert!(validate_planning_integrity(&cleaned).is_valid);
        assert!(cleaned.planning.block_count() <= mutated.planning.block_count());
    }
}
