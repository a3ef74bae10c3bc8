//! Registry services over the tracker domain.

mod manager;

pub use manager::{ProjectManager, ProjectManagerError, ProjectManagerResult};
