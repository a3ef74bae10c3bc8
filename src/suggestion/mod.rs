//! Optional text suggestions over tracker snapshots.
//!
//! The tracker never depends on this module. Presentation code hands it
//! read-only snapshots and prints whatever comes back. Two providers exist
//! and one is chosen at construction time by [`config::SuggestionConfig`]:
//! a deterministic offline one and a language-model one that degrades to
//! fixed text on any failure.
//!
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod config;
pub mod fallback;
pub mod ports;
pub mod prompts;

#[cfg(test)]
mod tests;
