//! Error types for tracker domain validation and parsing.

use thiserror::Error;

/// Malformed input rejected while constructing or querying domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The priority text is not one of `low`, `medium` or `high`.
    #[error("unknown task priority '{0}', expected low|medium|high")]
    UnknownPriority(String),

    /// The status text is not one of `pending` or `completed`.
    #[error("unknown task status '{0}', expected pending|completed")]
    UnknownStatus(String),
}
