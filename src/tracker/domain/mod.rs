//! Domain model for project and task tracking.
//!
//! Projects own their tasks outright and tasks hold no reference back to
//! their project. All timestamps come from an injected clock.

mod error;
mod project;
mod snapshot;
mod summary;
mod task;

pub use error::InvalidArgument;
pub use project::Project;
pub use snapshot::{ProjectSnapshot, TaggedTaskSnapshot, TaskSnapshot, iso8601};
pub use summary::ProjectSummary;
pub use task::{Task, TaskPriority, TaskStatus};
