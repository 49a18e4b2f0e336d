//! Eligibility filter.
//!
//! Decides which tasks and people take part in planning. Anything filtered
//! out here produces no blocks; this is not an error.

use crate::models::{Person, Task};

/// Whether a task should receive planned hours.
///
/// Requires an assignee, a non-completed status and pending work.
pub fn is_eligible_task(task: &Task) -> bool {
    task.assignee_id.is_some() && !task.status.is_completed() && task.has_pending_work()
}

/// Tasks that should receive planned hours, in input order.
pub fn eligible_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|t| is_eligible_task(t)).collect()
}

/// Active people, in input order.
pub fn eligible_people(people: &[Person]) -> Vec<&Person> {
    people.iter().filter(|p| p.active).collect()
}

/// Eligible tasks assigned to `person_id`, in input order.
pub fn tasks_of<'a>(tasks: &[&'a Task], person_id: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .copied()
        .filter(|t| t.is_assigned_to(person_id))
        .collect()
}
