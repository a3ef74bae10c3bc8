//! Project registry and cross-project aggregation.

use crate::tracker::domain::{
    InvalidArgument, Project, ProjectSummary, TaggedTaskSnapshot, Task, TaskSnapshot, TaskStatus,
};
use indexmap::IndexMap;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectManagerError {
    /// Input validation failed.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// A project with the same name is already registered.
    #[error("project '{0}' already exists")]
    DuplicateProject(String),
}

/// Result type for registry operations.
pub type ProjectManagerResult<T> = Result<T, ProjectManagerError>;

/// Registry of projects keyed by unique name.
///
/// Iteration follows registration order. The registry is not synchronised;
/// hosts sharing it across threads must serialise access themselves.
#[derive(Debug, Clone)]
pub struct ProjectManager<C = DefaultClock>
where
    C: Clock,
{
    projects: IndexMap<String, Project>,
    clock: Arc<C>,
}

impl ProjectManager<DefaultClock> {
    /// Creates an empty registry backed by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for ProjectManager<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ProjectManager<C>
where
    C: Clock,
{
    /// Creates an empty registry using the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            projects: IndexMap::new(),
            clock,
        }
    }

    /// Returns the clock used for project and task timestamps.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Creates and registers a new project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectManagerError::DuplicateProject`] when the name is
    /// taken, or [`ProjectManagerError::InvalidArgument`] when it is blank.
    /// The registry is unchanged on error.
    pub fn create_project(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> ProjectManagerResult<&mut Project> {
        let project = Project::new(name, description, &*self.clock)?;
        if self.projects.contains_key(project.name()) {
            return Err(ProjectManagerError::DuplicateProject(
                project.name().to_owned(),
            ));
        }
        let entry = self.projects.entry(project.name().to_owned());
        Ok(entry.or_insert(project))
    }

    /// Looks up a project by name.
    ///
    /// Returns `None` when no such project is registered.
    #[must_use]
    pub fn get_project(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    /// Looks up a project by name for mutation.
    pub fn get_project_mut(&mut self, name: &str) -> Option<&mut Project> {
        self.projects.get_mut(name)
    }

    /// Returns project names in registration order.
    #[must_use]
    pub fn list_projects(&self) -> Vec<&str> {
        self.projects.keys().map(String::as_str).collect()
    }

    /// Returns registered projects in registration order.
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    /// Removes a project and all of its tasks.
    ///
    /// Returns whether a project was removed. The remaining projects keep
    /// their relative order.
    pub fn delete_project(&mut self, name: &str) -> bool {
        self.projects.shift_remove(name).is_some()
    }

    /// Appends a task to the named project.
    ///
    /// Returns the task's position, or `None` when the project is missing.
    pub fn add_task(&mut self, project: &str, task: Task) -> Option<usize> {
        self.projects
            .get_mut(project)
            .map(|target| target.add_task(task))
    }

    /// Completes the task at `index` in the named project.
    ///
    /// Returns `false` when the project or task does not exist.
    pub fn complete_task(&mut self, project: &str, index: usize) -> bool {
        let clock = &*self.clock;
        self.projects
            .get_mut(project)
            .is_some_and(|target| target.complete_task(index, clock))
    }

    /// Returns snapshots of the pending tasks of the named project.
    #[must_use]
    pub fn pending_tasks(&self, project: &str) -> Option<Vec<TaskSnapshot>> {
        self.projects.get(project).map(|target| {
            target
                .tasks_by_status(Some(TaskStatus::Pending))
                .into_iter()
                .map(Task::snapshot)
                .collect()
        })
    }

    /// Flattens every task of every project, tagged with its project name.
    ///
    /// Projects are visited in registration order and tasks in insertion
    /// order.
    #[must_use]
    pub fn get_all_tasks(&self) -> Vec<TaggedTaskSnapshot> {
        self.projects
            .iter()
            .flat_map(|(name, project)| {
                project.tasks().iter().map(move |task| TaggedTaskSnapshot {
                    project: name.clone(),
                    task: task.snapshot(),
                })
            })
            .collect()
    }

    /// Computes project and task counts over the whole registry.
    #[must_use]
    pub fn get_summary(&self) -> ProjectSummary {
        let (total_tasks, completed_tasks) =
            self.projects
                .values()
                .fold((0, 0), |(total, completed), project| {
                    (
                        total + project.task_count(),
                        completed + project.completed_count(),
                    )
                });

        ProjectSummary {
            total_projects: self.projects.len(),
            total_tasks,
            completed_tasks,
            pending_tasks: total_tasks - completed_tasks,
        }
    }
}
