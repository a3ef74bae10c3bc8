//! Language-model provider tests against a mocked transport.

use super::pending_task;
use crate::suggestion::adapters::{ChatSuggestionProvider, parse_task_list};
use crate::suggestion::fallback::{FAILED_ANALYSIS, NO_PENDING_TASKS};
use crate::suggestion::ports::{
    ChatCompletionClient, ChatCompletionError, ChatCompletionResult, ChatRequest, ChatRole,
    SuggestionProvider,
};
use crate::tracker::domain::{ProjectSummary, TaskPriority};
use mockall::mock;
use rstest::rstest;

mock! {
    Transport {}

    impl ChatCompletionClient for Transport {
        fn complete(&self, request: &ChatRequest) -> ChatCompletionResult<String>;
    }
}

fn replying(reply: &'static str) -> MockTransport {
    let mut client = MockTransport::new();
    client
        .expect_complete()
        .times(1)
        .returning(move |_| Ok(reply.to_owned()));
    client
}

fn failing() -> MockTransport {
    let mut client = MockTransport::new();
    client
        .expect_complete()
        .times(1)
        .returning(|_| Err(ChatCompletionError::Status(500)));
    client
}

#[rstest]
fn chat_provider_is_available() {
    let provider = ChatSuggestionProvider::new(MockTransport::new());

    assert!(provider.available());
}

#[rstest]
fn suggest_tasks_parses_bulleted_reply() {
    let provider = ChatSuggestionProvider::new(replying(
        "Here are some tasks:\n- Gather requirements\n  - Sketch wireframes\n• Build prototype\nThanks!",
    ));

    assert_eq!(
        provider.suggest_tasks("A recipe site"),
        vec!["Gather requirements", "Sketch wireframes", "Build prototype"]
    );
}

#[rstest]
fn suggest_tasks_sends_description_with_token_budget() {
    let mut client = MockTransport::new();
    client
        .expect_complete()
        .withf(|request| {
            request.max_tokens == 300
                && request.messages.iter().any(|message| {
                    message.role == ChatRole::User && message.content.contains("A recipe site")
                })
        })
        .times(1)
        .returning(|_| Ok("- One".to_owned()));
    let provider = ChatSuggestionProvider::new(client);

    assert_eq!(provider.suggest_tasks("A recipe site"), vec!["One"]);
}

#[rstest]
fn suggest_tasks_without_bullets_uses_fallback() {
    let provider = ChatSuggestionProvider::new(replying("I cannot help with that."));

    assert_eq!(
        provider.suggest_tasks("Anything"),
        vec!["Define project scope", "Plan implementation"]
    );
}

#[rstest]
fn suggest_tasks_transport_failure_uses_fallback() {
    let provider = ChatSuggestionProvider::new(failing());

    assert_eq!(
        provider.suggest_tasks("Anything"),
        vec!["Define project scope", "Plan implementation"]
    );
}

#[rstest]
fn parse_task_list_caps_at_seven_items() {
    let reply = (1..=10)
        .map(|n| format!("- Task {n}"))
        .collect::<Vec<_>>()
        .join("\n");

    let tasks = parse_task_list(&reply);

    assert_eq!(tasks.len(), 7);
    assert_eq!(tasks.last().map(String::as_str), Some("Task 7"));
}

#[rstest]
fn analyze_returns_trimmed_reply() {
    let provider = ChatSuggestionProvider::new(replying("  Steady progress.\n"));

    assert_eq!(
        provider.analyze(&ProjectSummary::default()),
        "Steady progress."
    );
}

#[rstest]
fn analyze_failure_uses_fallback() {
    let provider = ChatSuggestionProvider::new(failing());

    assert_eq!(provider.analyze(&ProjectSummary::default()), FAILED_ANALYSIS);
}

#[rstest]
fn next_step_with_nothing_pending_skips_the_model() {
    let mut client = MockTransport::new();
    client.expect_complete().never();
    let provider = ChatSuggestionProvider::new(client);

    assert_eq!(provider.next_step(&[]), NO_PENDING_TASKS);
}

#[rstest]
fn next_step_returns_model_advice() {
    let provider = ChatSuggestionProvider::new(replying("Do the login first."));
    let tasks = [pending_task("Implement authentication", TaskPriority::High)];

    assert_eq!(provider.next_step(&tasks), "Do the login first.");
}

#[rstest]
fn next_step_failure_names_first_task() {
    let provider = ChatSuggestionProvider::new(failing());
    let tasks = [
        pending_task("Design app screens", TaskPriority::Medium),
        pending_task("Implement authentication", TaskPriority::High),
    ];

    assert_eq!(
        provider.next_step(&tasks),
        "Consider starting with: Design app screens"
    );
}
