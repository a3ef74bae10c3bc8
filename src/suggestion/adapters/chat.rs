//! Language-model backed provider over a chat-completion transport.

use crate::suggestion::fallback::{FAILED_ANALYSIS, FAILED_TASK_SUGGESTIONS, NO_PENDING_TASKS, owned};
use crate::suggestion::ports::{ChatCompletionClient, SuggestionProvider};
use crate::suggestion::prompts;
use crate::tracker::domain::{ProjectSummary, TaskSnapshot};
use tracing::{debug, warn};

/// Maximum number of task suggestions kept from a model response.
pub const MAX_TASK_SUGGESTIONS: usize = 7;

const BULLETS: [char; 2] = ['-', '•'];

/// Provider that asks a language model and falls back to fixed text on any
/// failure.
#[derive(Debug, Clone)]
pub struct ChatSuggestionProvider<C>
where
    C: ChatCompletionClient,
{
    client: C,
}

impl<C> ChatSuggestionProvider<C>
where
    C: ChatCompletionClient,
{
    /// Creates a provider over the given transport.
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C> SuggestionProvider for ChatSuggestionProvider<C>
where
    C: ChatCompletionClient,
{
    fn available(&self) -> bool {
        true
    }

    fn suggest_tasks(&self, description: &str) -> Vec<String> {
        let response = prompts::suggest_tasks_request(description)
            .and_then(|request| self.client.complete(&request));
        match response {
            Ok(content) => {
                let tasks = parse_task_list(&content);
                if tasks.is_empty() {
                    debug!("model response held no bulleted tasks");
                    owned(&FAILED_TASK_SUGGESTIONS)
                } else {
                    tasks
                }
            }
            Err(err) => {
                warn!(error = %err, "generating task suggestions failed");
                owned(&FAILED_TASK_SUGGESTIONS)
            }
        }
    }

    fn analyze(&self, summary: &ProjectSummary) -> String {
        prompts::analyze_request(summary)
            .and_then(|request| self.client.complete(&request))
            .map_or_else(
                |err| {
                    warn!(error = %err, "analysing project status failed");
                    FAILED_ANALYSIS.to_owned()
                },
                |content| content.trim().to_owned(),
            )
    }

    fn next_step(&self, pending_tasks: &[TaskSnapshot]) -> String {
        let Some(first) = pending_tasks.first() else {
            return NO_PENDING_TASKS.to_owned();
        };

        prompts::next_step_request(pending_tasks)
            .and_then(|request| self.client.complete(&request))
            .map_or_else(
                |err| {
                    warn!(error = %err, "suggesting next steps failed");
                    format!("Consider starting with: {}", first.title)
                },
                |content| content.trim().to_owned(),
            )
    }
}

/// Extracts bulleted lines from a model response.
///
/// Lines starting with `-` or `•` are kept with bullets and surrounding
/// spaces removed, capped at [`MAX_TASK_SUGGESTIONS`].
#[must_use]
pub fn parse_task_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(BULLETS))
        .map(|line| {
            line.trim_matches(|c: char| BULLETS.contains(&c) || c == ' ')
                .trim()
                .to_owned()
        })
        .filter(|task| !task.is_empty())
        .take(MAX_TASK_SUGGESTIONS)
        .collect()
}
