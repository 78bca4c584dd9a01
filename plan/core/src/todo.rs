//! Todo Types
//!
//! The records that make up an agent's task plan. The plan is owned by
//! whoever produced it (usually an agent's todo tool); surfaces only read it.

use serde::{Deserialize, Serialize};

/// Todo identifier, opaque and unique within a single plan
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(pub String);

impl TodoId {
    /// Create a new todo ID from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Lifecycle stage of a todo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    /// Not started yet
    Pending,
    /// Being worked on right now
    InProgress,
    /// Finished successfully
    Completed,
    /// Dropped from the plan
    Cancelled,
}

impl TodoStatus {
    /// Parse a status string, accepting the spellings agents commonly emit
    ///
    /// Returns `None` for anything unrecognised so callers can decide on a
    /// fallback.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "todo" => Some(Self::Pending),
            "in_progress" | "in-progress" | "inprogress" | "running" => Some(Self::InProgress),
            "completed" | "complete" | "done" => Some(Self::Completed),
            "cancelled" | "canceled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Whether the todo is finished, one way or the other
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// One entry in a task plan
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique todo identifier
    pub id: TodoId,
    /// What needs doing
    pub content: String,
    /// Current status
    pub status: TodoStatus,
}

impl TodoItem {
    /// Create a new todo
    #[must_use]
    pub fn new(id: impl Into<String>, content: impl Into<String>, status: TodoStatus) -> Self {
        Self {
            id: TodoId::new(id),
            content: content.into(),
            status,
        }
    }

    /// Create a new pending todo
    #[must_use]
    pub fn pending(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, content, TodoStatus::Pending)
    }
}

/// Find the todo currently being worked on
///
/// When several todos are in progress the first one in plan order wins.
#[must_use]
pub fn current_todo(items: &[TodoItem]) -> Option<&TodoItem> {
    items.iter().find(|t| t.status == TodoStatus::InProgress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(TodoStatus::parse("pending"), Some(TodoStatus::Pending));
        assert_eq!(TodoStatus::parse("IN_PROGRESS"), Some(TodoStatus::InProgress));
        assert_eq!(TodoStatus::parse(" in-progress "), Some(TodoStatus::InProgress));
        assert_eq!(TodoStatus::parse("done"), Some(TodoStatus::Completed));
        assert_eq!(TodoStatus::parse("canceled"), Some(TodoStatus::Cancelled));
        assert_eq!(TodoStatus::parse("blocked"), None);
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&TodoStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let status: TodoStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, TodoStatus::Cancelled);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(TodoStatus::Completed.is_terminal());
        assert!(TodoStatus::Cancelled.is_terminal());
        assert!(!TodoStatus::Pending.is_terminal());
        assert!(!TodoStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_current_todo_picks_first_in_progress() {
        let items = vec![
            TodoItem::new("1", "A", TodoStatus::Completed),
            TodoItem::new("2", "B", TodoStatus::InProgress),
            TodoItem::new("3", "C", TodoStatus::InProgress),
        ];

        let current = current_todo(&items).unwrap();
        assert_eq!(current.id, TodoId::new("2"));
    }

    #[test]
    fn test_current_todo_none() {
        let items = vec![TodoItem::pending("1", "A")];
        assert!(current_todo(&items).is_none());
        assert!(current_todo(&[]).is_none());
    }
}
