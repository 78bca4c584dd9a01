//! Plan Summary
//!
//! Aggregate numbers shown in a plan's header and progress bar.

use crate::todo::{current_todo, TodoItem, TodoStatus};

/// Counts and progress for a non-empty plan
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanSummary<'a> {
    /// Number of completed todos
    pub completed: usize,
    /// Number of cancelled todos
    pub cancelled: usize,
    /// Number of todos in progress
    pub in_progress: usize,
    /// Number of pending todos
    pub pending: usize,
    /// Total number of todos
    pub total: usize,
    /// `round(100 * completed / total)`
    pub percent: u8,
    /// First todo in plan order that is in progress
    pub current: Option<&'a TodoItem>,
}

impl<'a> PlanSummary<'a> {
    /// Summarise a plan
    ///
    /// Returns `None` for an empty plan, which surfaces treat as "show nothing".
    #[must_use]
    pub fn from_items(items: &'a [TodoItem]) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        let mut summary = Self {
            completed: 0,
            cancelled: 0,
            in_progress: 0,
            pending: 0,
            total: items.len(),
            percent: 0,
            current: current_todo(items),
        };

        for item in items {
            match item.status {
                TodoStatus::Pending => summary.pending += 1,
                TodoStatus::InProgress => summary.in_progress += 1,
                TodoStatus::Completed => summary.completed += 1,
                TodoStatus::Cancelled => summary.cancelled += 1,
            }
        }

        summary.percent = percent(summary.completed, summary.total);
        Some(summary)
    }

    /// Whether every todo is finished (completed or cancelled)
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.pending == 0 && self.in_progress == 0
    }
}

/// Completion percentage, rounding halves up
///
/// `total` must be non-zero.
#[must_use]
pub fn percent(completed: usize, total: usize) -> u8 {
    debug_assert!(total > 0);
    let completed = completed.min(total);
    // floor(100c/t + 1/2) without going through floats
    ((200 * completed + total) / (2 * total)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(statuses: &[TodoStatus]) -> Vec<TodoItem> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, s)| TodoItem::new(i.to_string(), format!("Task {i}"), *s))
            .collect()
    }

    #[test]
    fn test_empty_plan_has_no_summary() {
        assert!(PlanSummary::from_items(&[]).is_none());
    }

    #[test]
    fn test_mixed_plan() {
        let items = vec![
            TodoItem::new("1", "A", TodoStatus::Completed),
            TodoItem::new("2", "B", TodoStatus::InProgress),
            TodoItem::new("3", "C", TodoStatus::Pending),
        ];

        let summary = PlanSummary::from_items(&items).unwrap();
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.percent, 33);
        assert_eq!(summary.current.map(|t| t.content.as_str()), Some("B"));
        assert!(!summary.is_finished());
    }

    #[test]
    fn test_all_completed() {
        let items = plan(&[TodoStatus::Completed; 4]);

        let summary = PlanSummary::from_items(&items).unwrap();
        assert_eq!(summary.percent, 100);
        assert!(summary.current.is_none());
        assert!(summary.is_finished());
    }

    #[test]
    fn test_cancelled_does_not_count_as_completed() {
        let items = plan(&[TodoStatus::Cancelled, TodoStatus::Completed]);

        let summary = PlanSummary::from_items(&items).unwrap();
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.cancelled, 1);
        assert_eq!(summary.percent, 50);
    }

    #[test]
    fn test_percent_rounds_half_up() {
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(0, 5), 0);
        assert_eq!(percent(1, 200), 1);
        assert_eq!(percent(1, 201), 0);
    }
}
