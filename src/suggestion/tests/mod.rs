//! Unit tests for suggestion providers and configuration.

mod chat_tests;

use crate::tracker::domain::{TaskPriority, TaskSnapshot, TaskStatus};

fn pending_task(title: &str, priority: TaskPriority) -> TaskSnapshot {
    TaskSnapshot {
        title: title.to_owned(),
        description: String::new(),
        priority,
        status: TaskStatus::Pending,
        created_at: "2024-03-01T09:00:00.000000Z".to_owned(),
        completed_at: None,
    }
}
