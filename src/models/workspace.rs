//! Workspace snapshot.
//!
//! The workspace is an immutable value holding every entity the planner
//! reads plus the current planning. Updates consume a snapshot and return
//! a new one; older snapshots held elsewhere are never affected.

use serde::{Deserialize, Serialize};

use super::{Person, Planning, Project, Task};

/// People, projects, tasks and their planning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    /// All people (active or not).
    #[serde(default)]
    pub people: Vec<Person>,
    /// All projects.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// All tasks.
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Current planning.
    #[serde(default)]
    pub planning: Planning,
}

impl Workspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a person.
    pub fn with_person(mut self, person: Person) -> Self {
        self.people.push(person);
        self
    }

    /// Adds a project.
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    /// Adds a task.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Replaces the planning.
    pub fn with_planning(mut self, planning: Planning) -> Self {
        self.planning = planning;
        self
    }

    /// Looks up a person by id.
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Looks up a project by id.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Looks up a task by id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks assigned to a person, in workspace order.
    pub fn tasks_for_person(&self, person_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_assigned_to(person_id))
            .collect()
    }

    /// Whether anything the planner reads differs from `previous`.
    ///
    /// Names, titles, projects and the planning itself are ignored.
    pub fn scheduling_inputs_changed(&self, previous: &Workspace) -> bool {
        if self.people.len() != previous.people.len() || self.tasks.len() != previous.tasks.len() {
            return true;
        }

        let people_changed = self.people.iter().zip(&previous.people).any(|(a, b)| {
            a.id != b.id || a.active != b.active || a.hours_per_day != b.hours_per_day
        });
        if people_changed {
            return true;
        }

        self.tasks.iter().zip(&previous.tasks).any(|(a, b)| {
            a.id != b.id
                || a.project_id != b.project_id
                || a.cost_hours != b.cost_hours
                || a.done_hours != b.done_hours
                || a.status != b.status
                || a.priority != b.priority
                || a.assignee_id != b.assignee_id
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn sample() -> Workspace {
        Workspace::new()
            .with_person(Person::new("P1").with_name("Ada"))
            .with_project(Project::new("PRJ").with_name("Compiler"))
            .with_task(Task::new("T1", "PRJ").with_cost(8.0).assigned_to("P1"))
            .with_task(Task::new("T2", "PRJ").with_cost(4.0))
    }

    #[test]
    fn test_lookups() {
        let ws = sample();
        assert_eq!(ws.person("P1").map(|p| p.name.as_str()), Some("Ada"));
        assert!(ws.person("P2").is_none());
        assert!(ws.project("PRJ").is_some());
        assert!(ws.task("T2").is_some());
        assert_eq!(ws.tasks_for_person("P1").len(), 1);
    }

    #[test]
    fn test_builders_leave_original_untouched() {
        let original = sample();
        let updated = original.clone().with_task(Task::new("T3", "PRJ"));
        assert_eq!(original.tasks.len(), 2);
        assert_eq!(updated.tasks.len(), 3);
    }

    #[test]
    fn test_scheduling_inputs_unchanged() {
        let a = sample();
        let mut b = sample();
        b.people[0].name = "Grace".into();
        b.tasks[0].title = "renamed".into();
        assert!(!b.scheduling_inputs_changed(&a));
    }

    #[test]
    fn test_scheduling_inputs_changed() {
        let base = sample();

        let mut capacity = base.clone();
        capacity.people[0].hours_per_day = 6.0;
        assert!(capacity.scheduling_inputs_changed(&base));

        let mut deactivated = base.clone();
        deactivated.people[0].active = false;
        assert!(deactivated.scheduling_inputs_changed(&base));

        let mut status = base.clone();
        status.tasks[0].status = TaskStatus::Completed;
        assert!(status.scheduling_inputs_changed(&base));

        let mut priority = base.clone();
        priority.tasks[1].priority = 5;
        assert!(priority.scheduling_inputs_changed(&base));

        let mut assignment = base.clone();
        assignment.tasks[1].assignee_id = Some("P1".into());
        assert!(assignment.scheduling_inputs_changed(&base));

        let added = base.clone().with_task(Task::new("T3", "PRJ"));
        assert!(added.scheduling_inputs_changed(&base));
    }
}
