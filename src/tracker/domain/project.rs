//! Project entity: a named, ordered collection of tasks.

use super::{InvalidArgument, ProjectSnapshot, Task, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A named container of tasks.
///
/// Tasks keep their insertion order; no other ordering is ever applied.
/// Name uniqueness is enforced by the owning registry, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    description: String,
    tasks: Vec<Task>,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Creates an empty project.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyProjectName`] when the name is blank.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, InvalidArgument> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvalidArgument::EmptyProjectName);
        }

        Ok(Self {
            name,
            description: description.into(),
            tasks: Vec::new(),
            created_at: clock.utc(),
        })
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Appends a task and returns its position.
    pub fn add_task(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len() - 1
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    /// Returns tasks in insertion order, optionally restricted to one status.
    #[must_use]
    pub fn tasks_by_status(&self, status: Option<TaskStatus>) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| status.is_none_or(|wanted| task.status() == wanted))
            .collect()
    }

    /// Filters tasks by a textual status such as `"pending"`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::UnknownStatus`] for unrecognised status text.
    pub fn tasks_by_status_text(&self, status: &str) -> Result<Vec<&Task>, InvalidArgument> {
        let parsed = TaskStatus::try_from(status)?;
        Ok(self.tasks_by_status(Some(parsed)))
    }

    /// Returns the task at `index`, if any.
    #[must_use]
    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Returns the task at `index` for mutation, if any.
    pub fn task_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    /// Completes the task at `index`.
    ///
    /// Returns `false` when no task exists at that position.
    pub fn complete_task(&mut self, index: usize, clock: &impl Clock) -> bool {
        self.task_mut(index).is_some_and(|task| {
            task.complete(clock);
            true
        })
    }

    /// Returns a read-only snapshot of the project and its tasks.
    #[must_use]
    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot::from_project(self)
    }
}
