//! Informational reports computed from the task snapshot. None of them
//! mutate anything.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use taskpad_core::{Priority, Task, TaskStats, priority_breakdown, productivity_score};

use crate::config::OverviewConfig;
use crate::command::CommandParseError;

/// Listing caps for [`listings_report`].
const LISTED_IDS: usize = 5;
const LISTED_TEXTS: usize = 3;
const LISTED_PENDING: usize = 3;

/// Theme named by the overview; the workload verdict does not change it.
const BASE_THEME: &str = "light";

/// Which report to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoKind {
    /// Settings summary and workload assessment.
    Overview,
    /// Capped listings of ids, texts and pending tasks.
    Listings,
    /// Productivity score followed by the task summary.
    Score,
    /// Pending high-priority tasks.
    HighPriority,
}

impl DemoKind {
    /// Every report, in menu order.
    pub const ALL: [Self; 4] = [Self::Overview, Self::Listings, Self::Score, Self::HighPriority];

    /// Short name used by commands.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Listings => "listings",
            Self::Score => "score",
            Self::HighPriority => "high",
        }
    }
}

impl FromStr for DemoKind {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" | "variables" => Ok(Self::Overview),
            "listings" | "loops" => Ok(Self::Listings),
            "score" | "functions" => Ok(Self::Score),
            "high" | "high-priority" | "high_priority" => Ok(Self::HighPriority),
            _ => Err(CommandParseError::UnknownDemo(s.to_owned())),
        }
    }
}

/// Produce the text for `kind`.
#[must_use]
pub fn report(kind: DemoKind, tasks: &[Task], overview: &OverviewConfig) -> String {
    match kind {
        DemoKind::Overview => overview_report(tasks, overview),
        DemoKind::Listings => listings_report(tasks),
        DemoKind::Score => score_report(tasks),
        DemoKind::HighPriority => high_priority_report(tasks),
    }
}

/// Settings plus a workload verdict bucketed by task count.
#[must_use]
pub fn overview_report(tasks: &[Task], overview: &OverviewConfig) -> String {
    let count = tasks.len();
    let heavy = count > overview.max_tasks / 2;

    let mut out = String::from("=== OVERVIEW ===\n\n");
    let _ = writeln!(out, "App: {}", overview.app_name);
    let _ = writeln!(out, "User Status: active");
    let _ = writeln!(out, "Max Tasks: {}", overview.max_tasks);
    let _ = writeln!(out, "Theme: {BASE_THEME}\n");

    out.push_str(if heavy {
        "Warning: You have many tasks!\n"
    } else {
        "Task load is manageable.\n"
    });
    out.push_str(match count {
        0 => "No tasks yet. Time to get productive!",
        1..5 => "Good start! Keep adding tasks.",
        5..10 => "You're being productive!",
        _ => "Busy schedule! Consider prioritizing.",
    });
    out
}

/// First few ids, texts, and pending texts.
#[must_use]
pub fn listings_report(tasks: &[Task]) -> String {
    let mut out = String::from("=== LISTINGS ===\n\nTASK IDS:\n");
    for (position, task) in tasks.iter().take(LISTED_IDS).enumerate() {
        let _ = writeln!(out, "Task {}: ID {}", position + 1, task.id);
    }

    out.push_str("\nTASK TEXTS:\n");
    for task in tasks.iter().take(LISTED_TEXTS) {
        let _ = writeln!(out, "- {} [{}]", task.text, task.priority);
    }

    out.push_str("\nPENDING:\n");
    for task in tasks.iter().filter(|task| !task.completed).take(LISTED_PENDING) {
        let _ = writeln!(out, "Pending: {}", task.text);
    }
    out
}

/// Productivity score and task summary.
#[must_use]
pub fn score_report(tasks: &[Task]) -> String {
    let mut out = String::from("=== PRODUCTIVITY ===\n\n");
    let _ = writeln!(out, "Productivity Score: {}/100\n", productivity_score(tasks));
    out.push_str(&task_summary(tasks));
    out
}

/// Totals and per-priority breakdown.
#[must_use]
pub fn task_summary(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks available for summary.".to_owned();
    }

    let stats = TaskStats::of(tasks);
    let mut out = String::from("TASK SUMMARY:\n");
    let _ = writeln!(out, "Total: {} tasks", stats.total);
    let _ = writeln!(out, "Completed: {} tasks", stats.completed);
    let _ = writeln!(out, "Pending: {} tasks\n", stats.pending);

    out.push_str("BY PRIORITY:\n");
    for count in priority_breakdown(tasks) {
        let _ = writeln!(
            out,
            "- {}: {} tasks ({} completed)",
            count.priority.as_str().to_ascii_uppercase(),
            count.total,
            count.completed
        );
    }
    out
}

/// Pending tasks with high priority.
#[must_use]
pub fn high_priority_report(tasks: &[Task]) -> String {
    let pending: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.priority == Priority::High && !task.completed)
        .collect();
    if pending.is_empty() {
        return "No high priority tasks pending.".to_owned();
    }

    let mut out = format!("Found {} high priority task(s):\nHigh Priority Tasks:\n", pending.len());
    for task in pending {
        let _ = writeln!(out, "- {}", task.text);
    }
    out
}
