//! Projection of the task snapshot into display rows.
//!
//! Rendering is a full rebuild from the current snapshot on every call; no
//! state is carried between calls and nothing is patched incrementally.

use serde::Serialize;
use taskpad_core::{ListFilter, Priority, Task, TaskId};

/// Action label for a pending task.
pub const COMPLETE_LABEL: &str = "Complete";
/// Action label for a completed task.
pub const UNDO_LABEL: &str = "Undo";

/// One line of the rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayRow {
    /// A surviving task.
    Task(TaskRow),
    /// Shown instead of task rows when the filtered view is empty.
    Placeholder {
        /// Informational text naming the active filter.
        message: String,
    },
}

impl DisplayRow {
    /// Task row payload, if this is not the placeholder.
    #[must_use]
    pub const fn as_task(&self) -> Option<&TaskRow> {
        match self {
            Self::Task(row) => Some(row),
            Self::Placeholder { .. } => None,
        }
    }
}

/// Display data for a single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    /// Identifier the row's actions dispatch with.
    pub id: TaskId,
    /// Task text.
    pub text: String,
    /// Task priority.
    pub priority: Priority,
    /// Badge text (`High`, `Medium`, `Low`).
    pub priority_label: &'static str,
    /// Style tag for the badge.
    pub priority_style: &'static str,
    /// Completion flag.
    pub completed: bool,
    /// `Complete` for pending tasks, `Undo` for completed ones.
    pub action_label: &'static str,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            priority: task.priority,
            priority_label: task.priority.label(),
            priority_style: task.priority.style_tag(),
            completed: task.completed,
            action_label: if task.completed { UNDO_LABEL } else { COMPLETE_LABEL },
        }
    }
}

/// Build the rows for `tasks` under `filter`, preserving snapshot order.
#[must_use]
pub fn render(tasks: &[Task], filter: ListFilter) -> Vec<DisplayRow> {
    let rows: Vec<DisplayRow> = tasks
        .iter()
        .filter(|task| filter.matches(task))
        .map(|task| DisplayRow::Task(TaskRow::from_task(task)))
        .collect();

    if rows.is_empty() {
        return vec![DisplayRow::Placeholder {
            message: placeholder_message(filter),
        }];
    }
    rows
}

/// Text of the empty-view placeholder.
#[must_use]
pub fn placeholder_message(filter: ListFilter) -> String {
    match filter {
        ListFilter::All => "No tasks found.".to_owned(),
        other => format!("No {other} tasks found."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskpad_core::TaskStore;

    fn store(entries: &[(&str, Priority)]) -> TaskStore {
        let mut store = TaskStore::new();
        for (text, priority) in entries {
            store
                .add(text, *priority)
                .unwrap_or_else(|err| panic!("add {text}: {err}"));
        }
        store
    }

    fn texts(rows: &[DisplayRow]) -> Vec<&str> {
        rows.iter()
            .filter_map(DisplayRow::as_task)
            .map(|row| row.text.as_str())
            .collect()
    }

    #[test]
    fn all_filter_keeps_insertion_order() {
        let store = store(&[("b", Priority::Low), ("a", Priority::High), ("c", Priority::Medium)]);
        let rows = render(store.all(), ListFilter::All);
        assert_eq!(texts(&rows), vec!["b", "a", "c"]);
    }

    #[test]
    fn rows_carry_badge_and_action_labels() {
        let mut store = store(&[("Buy milk", Priority::High), ("Walk dog", Priority::Low)]);
        store
            .toggle_completion(TaskId(1))
            .unwrap_or_else(|err| panic!("toggle: {err}"));

        let rows = render(store.all(), ListFilter::All);
        let Some(first) = rows[0].as_task() else {
            panic!("expected task row");
        };
        assert_eq!(first.priority_label, "High");
        assert_eq!(first.priority_style, "priority-high");
        assert!(first.completed);
        assert_eq!(first.action_label, UNDO_LABEL);

        let Some(second) = rows[1].as_task() else {
            panic!("expected task row");
        };
        assert_eq!(second.priority_label, "Low");
        assert_eq!(second.action_label, COMPLETE_LABEL);
    }

    #[test]
    fn completed_and_pending_partition_the_snapshot() {
        let mut store = store(&[("a", Priority::Low), ("b", Priority::Low), ("c", Priority::Low)]);
        store
            .toggle_completion(TaskId(2))
            .unwrap_or_else(|err| panic!("toggle: {err}"));

        assert_eq!(texts(&render(store.all(), ListFilter::Completed)), vec!["b"]);
        assert_eq!(texts(&render(store.all(), ListFilter::Pending)), vec!["a", "c"]);
    }

    #[test]
    fn empty_view_yields_single_placeholder_naming_filter() {
        let store = store(&[("a", Priority::Low)]);
        assert_eq!(
            render(store.all(), ListFilter::Completed),
            vec![DisplayRow::Placeholder {
                message: "No completed tasks found.".into()
            }]
        );
        assert_eq!(
            render(&[], ListFilter::All),
            vec![DisplayRow::Placeholder {
                message: "No tasks found.".into()
            }]
        );
    }
}
