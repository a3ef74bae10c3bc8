//! Task entity and its priority and lifecycle enumerations.

use super::{InvalidArgument, TaskSnapshot};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relative importance of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal importance.
    #[default]
    Medium,
    /// Should be picked up first.
    High,
}

impl TaskPriority {
    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = InvalidArgument;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(InvalidArgument::UnknownPriority(value.to_owned())),
        }
    }
}

impl FromStr for TaskPriority {
    type Err = InvalidArgument;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task lifecycle state.
///
/// The only transition is `Pending -> Completed`; `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not done yet.
    Pending,
    /// Done.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = InvalidArgument;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(InvalidArgument::UnknownStatus(value.to_owned())),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = InvalidArgument;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single trackable unit of work.
///
/// `completed_at` is set if and only if `status` is [`TaskStatus::Completed`].
/// Identity inside a project is positional; titles may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    description: String,
    priority: TaskPriority,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a pending task with an empty description and medium priority.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyTaskTitle`] when the title is blank.
    pub fn new(title: impl Into<String>, clock: &impl Clock) -> Result<Self, InvalidArgument> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(InvalidArgument::EmptyTaskTitle);
        }

        Ok(Self {
            title,
            description: String::new(),
            priority: TaskPriority::default(),
            status: TaskStatus::Pending,
            created_at: clock.utc(),
            completed_at: None,
        })
    }

    /// Creates a pending task from untyped text input.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] when the title is blank or the priority is
    /// not recognised.
    pub fn parse(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: &str,
        clock: &impl Clock,
    ) -> Result<Self, InvalidArgument> {
        let parsed_priority = TaskPriority::try_from(priority)?;
        Ok(Self::new(title, clock)?
            .with_description(description)
            .with_priority(parsed_priority))
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.status, TaskStatus::Completed)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, if completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Marks the task as completed.
    ///
    /// Only the first call stamps `completed_at`; later calls leave it as is.
    pub fn complete(&mut self, clock: &impl Clock) {
        self.status = TaskStatus::Completed;
        if self.completed_at.is_none() {
            self.completed_at = Some(clock.utc());
        }
    }

    /// Returns a read-only snapshot of every attribute.
    #[must_use]
    pub fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot::from_task(self)
    }
}
