//! Immutable, serialisable views of tasks and projects.
//!
//! Snapshots are what leaves the tracker: the suggestion layer and any
//! presentation code only ever see these, never the live entities.

use super::{Project, Task, TaskPriority, TaskStatus};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Renders a timestamp as ISO-8601 text with microsecond precision.
#[must_use]
pub fn iso8601(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Attribute mapping of a single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// Task title.
    pub title: String,
    /// Task description, possibly empty.
    pub description: String,
    /// Task priority.
    pub priority: TaskPriority,
    /// Lifecycle state.
    pub status: TaskStatus,
    /// Creation time as ISO-8601 text.
    pub created_at: String,
    /// Completion time as ISO-8601 text, `None` while pending.
    pub completed_at: Option<String>,
}

impl TaskSnapshot {
    pub(crate) fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority(),
            status: task.status(),
            created_at: iso8601(task.created_at()),
            completed_at: task.completed_at().map(iso8601),
        }
    }
}

/// Task snapshot tagged with the name of the project that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedTaskSnapshot {
    /// Owning project name.
    pub project: String,
    /// Task attributes.
    #[serde(flatten)]
    pub task: TaskSnapshot,
}

/// Attribute mapping of a project including its task snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    /// Project name.
    pub name: String,
    /// Project description, possibly empty.
    pub description: String,
    /// Task snapshots in insertion order.
    pub tasks: Vec<TaskSnapshot>,
    /// Creation time as ISO-8601 text.
    pub created_at: String,
}

impl ProjectSnapshot {
    pub(crate) fn from_project(project: &Project) -> Self {
        Self {
            name: project.name().to_owned(),
            description: project.description().to_owned(),
            tasks: project.tasks().iter().map(Task::snapshot).collect(),
            created_at: iso8601(project.created_at()),
        }
    }
}
