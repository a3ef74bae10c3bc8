//! Suggestion provider capability consumed by presentation code.

use crate::tracker::domain::{ProjectSummary, TaskSnapshot};

/// Text-generation capability over read-only tracker snapshots.
///
/// Every method is total: implementations absorb their own failures and
/// answer with a fixed fallback instead. Callers never learn why a fallback
/// was returned.
pub trait SuggestionProvider: Send + Sync {
    /// Reports whether a language model backs this provider.
    fn available(&self) -> bool;

    /// Suggests between zero and seven task titles for a project description.
    fn suggest_tasks(&self, description: &str) -> Vec<String>;

    /// Produces a short human-readable assessment of registry progress.
    fn analyze(&self, summary: &ProjectSummary) -> String;

    /// Recommends which pending task to work on next.
    fn next_step(&self, pending_tasks: &[TaskSnapshot]) -> String;
}

impl<P> SuggestionProvider for Box<P>
where
    P: SuggestionProvider + ?Sized,
{
    fn available(&self) -> bool {
        (**self).available()
    }

    fn suggest_tasks(&self, description: &str) -> Vec<String> {
        (**self).suggest_tasks(description)
    }

    fn analyze(&self, summary: &ProjectSummary) -> String {
        (**self).analyze(summary)
    }

    fn next_step(&self, pending_tasks: &[TaskSnapshot]) -> String {
        (**self).next_step(pending_tasks)
    }
}
