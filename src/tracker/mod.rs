//! In-memory project and task tracking.
//!
//! Callers create projects through a [`services::ProjectManager`], attach
//! tasks, complete them, then query the registry for aggregates. The
//! module follows the same split as the rest of the crate:
//!
//! - Domain types in [`domain`]
//! - Registry services in [`services`]
//!
//! Nothing here performs I/O or logs; failures surface as typed errors and
//! lookups that miss return `None`.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
