use serde::{Deserialize, Serialize};

use crate::Task;
use crate::priority::Priority;

/// Task counts derived from a snapshot. Always `total == completed + pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Tasks with the completion flag set.
    pub completed: usize,
    /// Tasks still open.
    pub pending: usize,
}

impl TaskStats {
    /// Count the given tasks.
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }

    /// Cosmetic warning level of the total count.
    #[must_use]
    pub const fn load_level(&self, thresholds: &Thresholds) -> LoadLevel {
        if self.total > thresholds.overloaded {
            LoadLevel::Overloaded
        } else if self.total > thresholds.busy {
            LoadLevel::Busy
        } else {
            LoadLevel::Light
        }
    }
}

/// Total-count boundaries for [`LoadLevel`]. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Totals above this are [`LoadLevel::Busy`].
    pub busy: usize,
    /// Totals above this are [`LoadLevel::Overloaded`].
    pub overloaded: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            busy: 5,
            overloaded: 10,
        }
    }
}

/// Escalating flag for the total counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadLevel {
    /// At or below the busy threshold.
    Light,
    /// Above busy, at or below overloaded.
    Busy,
    /// Above the overloaded threshold.
    Overloaded,
}

impl LoadLevel {
    /// Lowercase name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Busy => "busy",
            Self::Overloaded => "overloaded",
        }
    }
}

/// Total and completed counts for one priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCount {
    /// Priority these counts belong to.
    pub priority: Priority,
    /// Tasks with this priority.
    pub total: usize,
    /// Completed tasks with this priority.
    pub completed: usize,
}

/// Per-priority counts, highest priority first.
#[must_use]
pub fn priority_breakdown(tasks: &[Task]) -> [PriorityCount; 3] {
    Priority::ALL.map(|priority| {
        let (total, completed) = tasks
            .iter()
            .filter(|task| task.priority == priority)
            .fold((0, 0), |(total, completed), task| {
                (total + 1, completed + usize::from(task.completed))
            });
        PriorityCount {
            priority,
            total,
            completed,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskStore;
    use crate::clock::FixedClock;
    use crate::id::TaskId;
    use time::OffsetDateTime;

    fn store_with(entries: &[(&str, Priority, bool)]) -> TaskStore<FixedClock> {
        let mut store = TaskStore::with_clock(FixedClock(OffsetDateTime::UNIX_EPOCH));
        for (text, priority, completed) in entries {
            let id = store
                .add(text, *priority)
                .unwrap_or_else(|err| panic!("add {text}: {err}"))
                .id;
            if *completed {
                store
                    .toggle_completion(id)
                    .unwrap_or_else(|err| panic!("toggle {id}: {err}"));
            }
        }
        store
    }

    #[test]
    fn counts_add_up() {
        let store = store_with(&[
            ("a", Priority::High, true),
            ("b", Priority::Low, false),
            ("c", Priority::Medium, true),
        ]);
        let stats = TaskStats::of(store.all());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.total, stats.completed + stats.pending);
    }

    #[test]
    fn empty_snapshot_is_all_zero() {
        assert_eq!(TaskStats::of(&[]), TaskStats::default());
    }

    #[test]
    fn load_level_escalates_past_each_threshold() {
        let thresholds = Thresholds::default();
        let level = |total| {
            TaskStats {
                total,
                completed: 0,
                pending: total,
            }
            .load_level(&thresholds)
        };
        assert_eq!(level(0), LoadLevel::Light);
        assert_eq!(level(5), LoadLevel::Light);
        assert_eq!(level(6), LoadLevel::Busy);
        assert_eq!(level(10), LoadLevel::Busy);
        assert_eq!(level(11), LoadLevel::Overloaded);
    }

    #[test]
    fn breakdown_follows_priority_order() {
        let mut store = store_with(&[
            ("a", Priority::Low, true),
            ("b", Priority::High, false),
            ("c", Priority::High, true),
        ]);
        store
            .delete(TaskId(1))
            .unwrap_or_else(|err| panic!("delete: {err}"));
        let breakdown = priority_breakdown(store.all());
        assert_eq!(breakdown[0].priority, Priority::High);
        assert_eq!((breakdown[0].total, breakdown[0].completed), (2, 1));
        assert_eq!((breakdown[1].total, breakdown[1].completed), (0, 0));
        assert_eq!((breakdown[2].total, breakdown[2].completed), (0, 0));
    }
}
