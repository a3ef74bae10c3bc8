//! Prompt construction for the language-model provider.

use crate::suggestion::ports::{ChatCompletionError, ChatCompletionResult, ChatRequest};
use crate::tracker::domain::{ProjectSummary, TaskSnapshot};
use minijinja::{Environment, context};

/// Maximum number of pending tasks listed in a next-step prompt.
pub const NEXT_STEP_TASK_LIMIT: usize = 5;

const SUGGEST_TASKS_SYSTEM: &str = "You are a helpful project manager assistant. \
     Generate a list of 5-7 specific tasks for the given project.";
const SUGGEST_TASKS_USER: &str = "Generate tasks for this project: {{ description }}";
const SUGGEST_TASKS_MAX_TOKENS: u32 = 300;

const ANALYZE_SYSTEM: &str = "You are a helpful project manager. \
     Analyze the project status and provide brief insights.";
const ANALYZE_USER: &str = "Project summary: {{ summary }}";
const ANALYZE_MAX_TOKENS: u32 = 150;

const NEXT_STEP_SYSTEM: &str =
    "You are a helpful project manager. Suggest which task to work on next and why.";
const NEXT_STEP_USER: &str =
    "Pending tasks:{% for task in tasks %}\n- {{ task.title }} (Priority: {{ task.priority }}){% endfor %}";
const NEXT_STEP_MAX_TOKENS: u32 = 100;

/// Builds the task-suggestion request.
///
/// # Errors
///
/// Returns [`ChatCompletionError::Prompt`] when the template fails to render.
pub fn suggest_tasks_request(description: &str) -> ChatCompletionResult<ChatRequest> {
    let user = render(SUGGEST_TASKS_USER, context! { description })?;
    Ok(ChatRequest::new(
        SUGGEST_TASKS_SYSTEM,
        user,
        SUGGEST_TASKS_MAX_TOKENS,
    ))
}

/// Builds the status-analysis request. The summary is embedded as JSON.
///
/// # Errors
///
/// Returns [`ChatCompletionError::Prompt`] when serialisation or rendering
/// fails.
pub fn analyze_request(summary: &ProjectSummary) -> ChatCompletionResult<ChatRequest> {
    let summary_json = serde_json::to_string(summary)
        .map_err(|err| ChatCompletionError::Prompt(err.to_string()))?;
    let user = render(ANALYZE_USER, context! { summary => summary_json })?;
    Ok(ChatRequest::new(ANALYZE_SYSTEM, user, ANALYZE_MAX_TOKENS))
}

/// Builds the next-step request from at most [`NEXT_STEP_TASK_LIMIT`] tasks.
///
/// # Errors
///
/// Returns [`ChatCompletionError::Prompt`] when the template fails to render.
pub fn next_step_request(pending_tasks: &[TaskSnapshot]) -> ChatCompletionResult<ChatRequest> {
    let tasks: Vec<_> = pending_tasks
        .iter()
        .take(NEXT_STEP_TASK_LIMIT)
        .map(|task| context! { title => &task.title, priority => task.priority.as_str() })
        .collect();
    let user = render(NEXT_STEP_USER, context! { tasks })?;
    Ok(ChatRequest::new(NEXT_STEP_SYSTEM, user, NEXT_STEP_MAX_TOKENS))
}

fn render(template: &str, ctx: minijinja::Value) -> ChatCompletionResult<String> {
    Environment::new()
        .render_str(template, ctx)
        .map_err(|err| ChatCompletionError::Prompt(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{analyze_request, next_step_request, suggest_tasks_request};
    use crate::suggestion::ports::{ChatCompletionError, ChatRole};
    use crate::tracker::domain::{ProjectSummary, TaskPriority, TaskSnapshot, TaskStatus};
    use rstest::rstest;

    fn pending(title: &str, priority: TaskPriority) -> TaskSnapshot {
        TaskSnapshot {
            title: title.to_owned(),
            description: String::new(),
            priority,
            status: TaskStatus::Pending,
            created_at: "2024-03-01T09:00:00.000000Z".to_owned(),
            completed_at: None,
        }
    }

    fn user_text(request: &super::ChatRequest) -> Option<&str> {
        request
            .messages
            .iter()
            .find(|message| message.role == ChatRole::User)
            .map(|message| message.content.as_str())
    }

    #[rstest]
    fn suggest_tasks_request_embeds_description() -> Result<(), ChatCompletionError> {
        let request = suggest_tasks_request("A recipe sharing site")?;

        assert_eq!(request.max_tokens, 300);
        assert_eq!(
            user_text(&request),
            Some("Generate tasks for this project: A recipe sharing site")
        );
        assert_eq!(
            request.messages.first().map(|message| message.role),
            Some(ChatRole::System)
        );
        Ok(())
    }

    #[rstest]
    fn analyze_request_embeds_summary_as_json() -> Result<(), ChatCompletionError> {
        let summary = ProjectSummary {
            total_projects: 1,
            total_tasks: 2,
            completed_tasks: 1,
            pending_tasks: 1,
        };
        let request = analyze_request(&summary)?;

        assert_eq!(request.max_tokens, 150);
        assert_eq!(
            user_text(&request),
            Some(
                "Project summary: {\"total_projects\":1,\"total_tasks\":2,\
                 \"completed_tasks\":1,\"pending_tasks\":1}"
            )
        );
        Ok(())
    }

    #[rstest]
    fn next_step_request_lists_first_five_tasks() -> Result<(), ChatCompletionError> {
        let tasks: Vec<TaskSnapshot> = (1..=7)
            .map(|n| pending(&format!("Task {n}"), TaskPriority::Medium))
            .collect();
        let request = next_step_request(&tasks)?;

        let expected = "Pending tasks:\n- Task 1 (Priority: medium)\n- Task 2 (Priority: medium)\n\
                        - Task 3 (Priority: medium)\n- Task 4 (Priority: medium)\n\
                        - Task 5 (Priority: medium)";
        assert_eq!(request.max_tokens, 100);
        assert_eq!(user_text(&request), Some(expected));
        Ok(())
    }

    #[rstest]
    fn next_step_request_does_not_escape_titles() -> Result<(), ChatCompletionError> {
        let request = next_step_request(&[pending("Fix <nav> & footer", TaskPriority::High)])?;

        assert_eq!(
            user_text(&request),
            Some("Pending tasks:\n- Fix <nav> & footer (Priority: high)")
        );
        Ok(())
    }
}
