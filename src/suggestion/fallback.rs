//! Fixed texts returned when no language model answers.

/// Task suggestions from the offline provider.
pub const OFFLINE_TASK_SUGGESTIONS: [&str; 5] = [
    "Define project requirements",
    "Set up development environment",
    "Implement core functionality",
    "Write tests",
    "Document the project",
];

/// Task suggestions when a language-model call fails or yields no list.
pub const FAILED_TASK_SUGGESTIONS: [&str; 2] = ["Define project scope", "Plan implementation"];

/// Analysis for a registry with no tasks.
pub const NO_TASKS_ANALYSIS: &str = "No tasks yet. Consider adding some tasks to get started.";

/// Analysis when every task is completed.
pub const ALL_COMPLETED_ANALYSIS: &str = "Great job! All tasks are completed.";

/// Analysis when a language-model call fails.
pub const FAILED_ANALYSIS: &str = "Unable to analyze project status at this time.";

/// Next-step advice when nothing is pending.
pub const NO_PENDING_TASKS: &str = "No pending tasks. Great work! Consider planning the next phase.";

pub(crate) fn owned(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|text| (*text).to_owned()).collect()
}
