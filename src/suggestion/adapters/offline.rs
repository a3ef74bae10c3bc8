//! Deterministic provider used when no language model is configured.

use crate::suggestion::fallback::{
    ALL_COMPLETED_ANALYSIS, NO_PENDING_TASKS, NO_TASKS_ANALYSIS, OFFLINE_TASK_SUGGESTIONS, owned,
};
use crate::suggestion::ports::SuggestionProvider;
use crate::tracker::domain::{ProjectSummary, TaskPriority, TaskSnapshot};

/// Rule-based provider with fixed answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSuggestionProvider;

impl OfflineSuggestionProvider {
    /// Creates the offline provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SuggestionProvider for OfflineSuggestionProvider {
    fn available(&self) -> bool {
        false
    }

    fn suggest_tasks(&self, _description: &str) -> Vec<String> {
        owned(&OFFLINE_TASK_SUGGESTIONS)
    }

    fn analyze(&self, summary: &ProjectSummary) -> String {
        let Some(percent) = summary.completion_percent() else {
            return NO_TASKS_ANALYSIS.to_owned();
        };

        if summary.completed_tasks == summary.total_tasks {
            ALL_COMPLETED_ANALYSIS.to_owned()
        } else if summary.completed_tasks.saturating_mul(2) >= summary.total_tasks {
            format!("Good progress! {percent}% of tasks completed.")
        } else {
            format!("Project is in early stages. {percent}% completed.")
        }
    }

    fn next_step(&self, pending_tasks: &[TaskSnapshot]) -> String {
        let Some(first) = pending_tasks.first() else {
            return NO_PENDING_TASKS.to_owned();
        };

        pending_tasks
            .iter()
            .find(|task| task.priority == TaskPriority::High)
            .map_or_else(
                || format!("Start with: {}", first.title),
                |urgent| format!("Focus on high-priority tasks: {}", urgent.title),
            )
    }
}
