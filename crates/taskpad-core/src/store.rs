use tracing::debug;

use crate::Task;
use crate::clock::{Clock, SystemClock};
use crate::error::{TaskError, TaskResult};
use crate::filter::ListFilter;
use crate::id::TaskId;
use crate::priority::Priority;

/// Ordered, exclusively owned collection of tasks plus the id counter.
///
/// Insertion order is the canonical display order. Identifiers are never
/// reused until [`TaskStore::clear`] rewinds the counter.
#[derive(Debug, Clone)]
pub struct TaskStore<C = SystemClock> {
    tasks: Vec<Task>,
    next_id: TaskId,
    clock: C,
}

impl TaskStore<SystemClock> {
    /// Empty store stamping tasks with wall-clock time.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TaskStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TaskStore<C> {
    /// Empty store using the given clock for `created_at`.
    pub const fn with_clock(clock: C) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
            clock,
        }
    }

    /// Append a new pending task.
    ///
    /// # Errors
    /// Returns [`TaskError::EmptyTaskText`] when `text` is blank after trimming;
    /// the counter is not advanced in that case.
    pub fn add(&mut self, text: &str, priority: Priority) -> TaskResult<&Task> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TaskError::EmptyTaskText);
        }

        let id = self.next_id;
        self.next_id = id.next();
        let task = Task::new(id, trimmed.to_owned(), priority, self.clock.now());
        debug!(task = %id, %priority, "Added task");
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Flip the completion flag of a task.
    ///
    /// # Errors
    /// Returns [`TaskError::NotFound`] if no task has `id`.
    pub fn toggle_completion(&mut self, id: TaskId) -> TaskResult<&Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskError::NotFound { id })?;
        task.completed = !task.completed;
        debug!(task = %id, completed = task.completed, "Toggled task");
        Ok(&*task)
    }

    /// Remove a task permanently, returning it.
    ///
    /// # Errors
    /// Returns [`TaskError::NotFound`] if no task has `id`.
    pub fn delete(&mut self, id: TaskId) -> TaskResult<Task> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TaskError::NotFound { id })?;
        let removed = self.tasks.remove(index);
        debug!(task = %id, "Deleted task");
        Ok(removed)
    }

    /// Drop every task and rewind the id counter to [`TaskId::FIRST`].
    pub fn clear(&mut self) {
        let dropped = self.tasks.len();
        self.tasks.clear();
        self.next_id = TaskId::FIRST;
        debug!(dropped, "Cleared task store");
    }

    /// Snapshot of all tasks in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks surviving `filter`, in insertion order.
    pub fn filtered(&self, filter: ListFilter) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |task| filter.matches(task))
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Identifier the next successful [`TaskStore::add`] will assign.
    #[must_use]
    pub const fn next_id(&self) -> TaskId {
        self.next_id
    }
}
