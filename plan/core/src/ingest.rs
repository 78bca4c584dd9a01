//! Plan Ingestion
//!
//! Reads plans written by agent todo tools. Those tools are not always
//! consistent about field types or status spellings, so records are
//! normalised leniently: a malformed record still shows up in the plan with
//! a sensible default rather than failing the whole read.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::PlanError;
use crate::todo::{TodoId, TodoItem, TodoStatus};

/// A record as it appears on disk
#[derive(Debug, Deserialize)]
struct RawTodo {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default, alias = "description", alias = "text")]
    content: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Accepted top-level shapes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PlanDocument {
    List(Vec<RawTodo>),
    Wrapped { todos: Vec<RawTodo> },
}

/// Parse a plan from JSON text
///
/// Accepts either a bare array of records or an object with a `todos` array.
pub fn parse_plan(json: &str) -> Result<Vec<TodoItem>, PlanError> {
    let raw = match serde_json::from_str::<PlanDocument>(json)? {
        PlanDocument::List(todos) | PlanDocument::Wrapped { todos } => todos,
    };

    Ok(raw
        .into_iter()
        .enumerate()
        .map(|(index, record)| normalize(index, record))
        .collect())
}

/// Read and parse a plan file
pub fn load_plan(path: &Path) -> Result<Vec<TodoItem>, PlanError> {
    let json = fs::read_to_string(path).map_err(|source| PlanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_plan(&json)
}

fn normalize(index: usize, record: RawTodo) -> TodoItem {
    let id = match record.id {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => format!("#{index}"),
    };

    let status = match record.status.as_deref() {
        Some(s) => TodoStatus::parse(s).unwrap_or_else(|| {
            warn!(todo = %id, status = s, "Unknown todo status, treating as pending");
            TodoStatus::Pending
        }),
        None => {
            warn!(todo = %id, "Todo has no status, treating as pending");
            TodoStatus::Pending
        }
    };

    TodoItem {
        id: TodoId(id),
        content: record.content.unwrap_or_default(),
        status,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            {"id": "1", "content": "A", "status": "completed"},
            {"id": "2", "content": "B", "status": "in_progress"},
            {"id": "3", "content": "C", "status": "pending"}
        ]"#;

        let items = parse_plan(json).unwrap();
        assert_eq!(
            items,
            vec![
                TodoItem::new("1", "A", TodoStatus::Completed),
                TodoItem::new("2", "B", TodoStatus::InProgress),
                TodoItem::new("3", "C", TodoStatus::Pending),
            ]
        );
    }

    #[test]
    fn test_parse_wrapped_object() {
        let json = r#"{"todos": [{"id": "a", "content": "Write docs", "status": "cancelled"}]}"#;

        let items = parse_plan(json).unwrap();
        assert_eq!(items, vec![TodoItem::new("a", "Write docs", TodoStatus::Cancelled)]);
    }

    #[test]
    fn test_numeric_ids_and_extra_fields() {
        let json = r#"[{"id": 7, "content": "A", "status": "pending", "priority": "high"}]"#;

        let items = parse_plan(json).unwrap();
        assert_eq!(items[0].id, TodoId::new("7"));
    }

    #[test]
    fn test_malformed_records_are_tolerated() {
        let json = r#"[
            {"content": "No id", "status": "done"},
            {"id": "x", "status": "blocked"},
            {"id": "y", "content": "No status"}
        ]"#;

        let items = parse_plan(json).unwrap();
        assert_eq!(
            items,
            vec![
                TodoItem::new("#0", "No id", TodoStatus::Completed),
                TodoItem::new("x", "", TodoStatus::Pending),
                TodoItem::new("y", "No status", TodoStatus::Pending),
            ]
        );
    }

    #[test]
    fn test_empty_plan() {
        assert!(parse_plan("[]").unwrap().is_empty());
        assert!(parse_plan(r#"{"todos": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_plan("not json"), Err(PlanError::Json(_))));
        assert!(matches!(parse_plan(r#"{"tasks": []}"#), Err(PlanError::Json(_))));
    }

    #[test]
    fn test_load_plan_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "1", "content": "A", "status": "in_progress"}}]"#).unwrap();

        let items = load_plan(file.path()).unwrap();
        assert_eq!(items, vec![TodoItem::new("1", "A", TodoStatus::InProgress)]);
    }

    #[test]
    fn test_load_plan_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_plan(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(PlanError::Io { .. })));
    }
}
