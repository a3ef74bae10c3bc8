//! Wallestars: in-memory project and task tracking with optional
//! language-model suggestions.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure tracking logic with no infrastructure dependencies
//! - **Ports**: Trait interfaces for the suggestion capability and its transport
//! - **Adapters**: Offline and language-model providers, HTTP transport
//!
//! # Modules
//!
//! - [`tracker`]: Tasks, projects and the project registry
//! - [`suggestion`]: Suggestion providers over read-only tracker snapshots
//! - [`logging`]: Subscriber bootstrap for the command-line binary

pub mod logging;
pub mod suggestion;
pub mod tracker;
