//! Domain types for taskpad: tasks, the owning store, and the figures derived
//! from it.

/// Timestamp sources.
pub mod clock;
/// Error taxonomy.
pub mod error;
/// List view filters.
pub mod filter;
/// Identifier types.
pub mod id;
/// Task priorities.
pub mod priority;
/// Productivity scoring.
pub mod score;
/// Task counts and warning levels.
pub mod stats;
/// In-memory task collection.
pub mod store;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::error::{TaskError, TaskResult};
pub use crate::filter::ListFilter;
pub use crate::id::TaskId;
pub use crate::priority::Priority;
pub use crate::score::productivity_score;
pub use crate::stats::{LoadLevel, PriorityCount, TaskStats, Thresholds, priority_breakdown};
pub use crate::store::TaskStore;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier within the store.
    pub id: TaskId,
    /// Trimmed, non-empty description.
    pub text: String,
    /// Fixed at creation.
    pub priority: Priority,
    /// Completion flag, toggled by the user.
    pub completed: bool,
    /// Creation instant in UTC. Informational only.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Task {
    pub(crate) const fn new(
        id: TaskId,
        text: String,
        priority: Priority,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            text,
            priority,
            completed: false,
            created_at,
        }
    }
}
