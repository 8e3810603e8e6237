use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::Task;
use crate::error::TaskError;

/// View selector over the task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListFilter {
    /// Every task, in insertion order.
    #[default]
    All,
    /// Only tasks whose completion flag is set.
    Completed,
    /// Only tasks still open.
    Pending,
}

impl ListFilter {
    /// Filters in the order they are presented to the user.
    pub const ALL: [Self; 3] = [Self::All, Self::Completed, Self::Pending];

    /// Lowercase name used in status messages and commands.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    /// Capitalised label for filter tabs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }

    /// Whether the task survives this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
        }
    }

    /// Following filter, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Completed,
            Self::Completed => Self::Pending,
            Self::Pending => Self::All,
        }
    }

    /// Preceding filter, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Completed => Self::All,
            Self::Pending => Self::Completed,
        }
    }
}

impl fmt::Display for ListFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListFilter {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" | "done" => Ok(Self::Completed),
            "pending" | "todo" => Ok(Self::Pending),
            _ => Err(TaskError::InvalidFilter { token: s.to_owned() }),
        }
    }
}
