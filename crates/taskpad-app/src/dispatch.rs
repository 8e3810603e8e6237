//! Single entry point mapping user intents onto the task store.
//!
//! Every intent is handled to completion: mutate, recount, re-render. The
//! resulting [`Outcome`] carries everything a front end needs to repaint.

use serde::Serialize;
use taskpad_core::{
    Clock, ListFilter, LoadLevel, Priority, SystemClock, TaskError, TaskId, TaskStats, TaskStore,
    productivity_score,
};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::demo::{self, DemoKind};
use crate::render::{DisplayRow, render};

/// Question put to the user before clearing a non-empty list.
pub const CLEAR_ALL_PROMPT: &str = "Are you sure you want to clear all tasks?";

/// Status shown right after start-up.
pub const READY_MESSAGE: &str = "Task Manager initialized!";

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Create a task from the input field and the selected priority.
    AddTask {
        /// Raw text; trimmed by the store.
        text: String,
        /// Selected priority.
        priority: Priority,
    },
    /// Flip completion of a task.
    Toggle {
        /// Target task.
        id: TaskId,
    },
    /// Remove a task.
    Delete {
        /// Target task.
        id: TaskId,
    },
    /// Change the active list filter.
    SelectFilter {
        /// New filter.
        filter: ListFilter,
    },
    /// Remove every task after confirmation.
    ClearAll,
    /// Show an informational report.
    Demo(DemoKind),
}

/// Yes/no decision gate consulted before destructive intents.
pub trait Confirm {
    /// Answer `prompt`; `true` proceeds.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Normal feedback.
    Info,
    /// Rejected input.
    Error,
}

/// Text for the status/demo output region. Replaces whatever was there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Message body; demo reports span several lines.
    pub text: String,
    /// Severity.
    pub kind: StatusKind,
}

impl Status {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// Everything recomputed after an intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Whether the intent changed anything or produced its report.
    pub applied: bool,
    /// New status line; `None` leaves the previous one in place.
    pub status: Option<Status>,
    /// Counters.
    pub stats: TaskStats,
    /// Colour escalation of the total counter.
    pub level: LoadLevel,
    /// Current productivity score.
    pub score: u8,
    /// Filter the rows were rendered with.
    pub filter: ListFilter,
    /// Rendered list.
    pub rows: Vec<DisplayRow>,
}

/// Owns the task store and the active filter.
#[derive(Debug)]
pub struct Dispatcher<C = SystemClock> {
    store: TaskStore<C>,
    filter: ListFilter,
    config: AppConfig,
}

impl Dispatcher<SystemClock> {
    /// Dispatcher over an empty store.
    #[must_use]
    pub const fn new(config: AppConfig) -> Self {
        Self::with_store(TaskStore::new(), config)
    }
}

impl<C: Clock> Dispatcher<C> {
    /// Dispatcher over an existing store.
    pub const fn with_store(store: TaskStore<C>, config: AppConfig) -> Self {
        Self {
            store,
            filter: ListFilter::All,
            config,
        }
    }

    /// Read-only access to the store.
    pub const fn store(&self) -> &TaskStore<C> {
        &self.store
    }

    /// Active filter.
    pub const fn filter(&self) -> ListFilter {
        self.filter
    }

    /// Loaded configuration.
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Initial view, as shown on start-up.
    pub fn snapshot(&self) -> Outcome {
        self.outcome(true, Some(Status::info(READY_MESSAGE)))
    }

    /// Apply `intent`, consulting `confirm` only for a non-empty clear-all.
    pub fn dispatch(&mut self, intent: Intent, confirm: &mut impl Confirm) -> Outcome {
        info!(?intent, "Dispatching intent");
        let (applied, status) = match intent {
            Intent::AddTask { text, priority } => self.add_task(&text, priority),
            Intent::Toggle { id } => self.toggle(id),
            Intent::Delete { id } => self.delete(id),
            Intent::SelectFilter { filter } => {
                self.filter = filter;
                (true, Some(Status::info(format!("Filtered tasks: {filter}"))))
            }
            Intent::ClearAll => self.clear_all(confirm),
            Intent::Demo(kind) => {
                let text = demo::report(kind, self.store.all(), &self.config.overview);
                (true, Some(Status::info(text)))
            }
        };
        self.outcome(applied, status)
    }

    fn add_task(&mut self, text: &str, priority: Priority) -> (bool, Option<Status>) {
        match self.store.add(text, priority) {
            Ok(task) => {
                let message = format!("Task added: \"{}\" (Priority: {priority})", task.text);
                (true, Some(Status::info(message)))
            }
            Err(err) => {
                warn!(%err, "Rejected new task");
                (false, Some(Status::error(format!("Error: {err}"))))
            }
        }
    }

    fn toggle(&mut self, id: TaskId) -> (bool, Option<Status>) {
        match self.store.toggle_completion(id) {
            Ok(task) => {
                let state = if task.completed {
                    "completed"
                } else {
                    "marked as pending"
                };
                (true, Some(Status::info(format!("Task \"{}\" {state}", task.text))))
            }
            Err(err) => Self::ignore(&err),
        }
    }

    fn delete(&mut self, id: TaskId) -> (bool, Option<Status>) {
        match self.store.delete(id) {
            Ok(task) => (true, Some(Status::info(format!("Task \"{}\" deleted", task.text)))),
            Err(err) => Self::ignore(&err),
        }
    }

    fn clear_all(&mut self, confirm: &mut impl Confirm) -> (bool, Option<Status>) {
        if self.store.is_empty() {
            return (false, Some(Status::info("No tasks to clear!")));
        }
        if !confirm.confirm(CLEAR_ALL_PROMPT) {
            debug!("Clear all declined");
            return (false, Some(Status::info("Clear all cancelled.")));
        }
        self.store.clear();
        (true, Some(Status::info("All tasks cleared!")))
    }

    fn ignore(err: &TaskError) -> (bool, Option<Status>) {
        debug!(%err, "Ignoring intent for unknown task");
        (false, None)
    }

    fn outcome(&self, applied: bool, status: Option<Status>) -> Outcome {
        let tasks = self.store.all();
        let stats = TaskStats::of(tasks);
        Outcome {
            applied,
            status,
            stats,
            level: stats.load_level(&self.config.display.thresholds()),
            score: productivity_score(tasks),
            filter: self.filter,
            rows: render(tasks, self.filter),
        }
    }
}
