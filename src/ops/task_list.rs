use std::time::Duration;

use tracing::{debug, warn};

use crate::model::filter::FilterMode;
use crate::model::task::{Task, TaskId, normalize_due_date};

use super::notify::{DEFAULT_NOTIFY_DURATION, Notification, Notifier};

pub const MSG_EMPTY_TEXT: &str = "Please add a valid task";
pub const MSG_ADDED: &str = "Task added";
pub const MSG_UPDATED: &str = "Task updated";

/// Error type for task list operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task text is empty")]
    EmptyText,
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Which task, if any, the form is currently editing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(TaskId),
}

/// Result of a successful submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(TaskId),
    Updated(TaskId),
}

/// Number of tasks matching each filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub all: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskCounts {
    pub fn for_filter(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.all,
            FilterMode::Completed => self.completed,
            FilterMode::Pending => self.pending,
        }
    }
}

/// Owns the task collection plus the form and filter state around it.
///
/// Every mutation goes through a method here; the renderer only reads.
#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
    edit: EditSession,
    filter: FilterMode,
    text_buffer: String,
    date_buffer: String,
    notify_duration: Duration,
}

impl Default for TaskList {
    fn default() -> Self {
        TaskList::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        TaskList {
            tasks: Vec::new(),
            next_id: 1,
            edit: EditSession::Idle,
            filter: FilterMode::All,
            text_buffer: String::new(),
            date_buffer: String::new(),
            notify_duration: DEFAULT_NOTIFY_DURATION,
        }
    }

    /// Set how long emitted notifications should stay visible
    pub fn with_notify_duration(mut self, duration: Duration) -> Self {
        self.notify_duration = duration;
        self
    }

    // -----------------------------------------------------------------------
    // Form
    // -----------------------------------------------------------------------

    /// Add a new task or save the one being edited, from the current buffers.
    ///
    /// Blank text is rejected with a warning and leaves every piece of state
    /// untouched. On success both buffers are cleared.
    pub fn submit(&mut self, notifier: &mut impl Notifier) -> Result<SubmitOutcome, TaskError> {
        if self.text_buffer.trim().is_empty() {
            warn!("rejected submit with empty task text");
            notifier.notify(Notification::warning(MSG_EMPTY_TEXT, self.notify_duration));
            return Err(TaskError::EmptyText);
        }

        let outcome = match self.edit {
            EditSession::Editing(id) => {
                let idx = self.index_of(id)?;
                let task = &mut self.tasks[idx];
                task.text = self.text_buffer.clone();
                task.due_date = normalize_due_date(&self.date_buffer);
                self.edit = EditSession::Idle;
                debug!(%id, "updated task");
                notifier.notify(Notification::success(MSG_UPDATED, self.notify_duration));
                SubmitOutcome::Updated(id)
            }
            EditSession::Idle => {
                let id = self.alloc_id();
                self.tasks
                    .push(Task::new(id, self.text_buffer.clone(), &self.date_buffer));
                debug!(%id, "added task");
                notifier.notify(Notification::success(MSG_ADDED, self.notify_duration));
                SubmitOutcome::Added(id)
            }
        };

        self.text_buffer.clear();
        self.date_buffer.clear();
        Ok(outcome)
    }

    /// Load a task into the form for editing
    pub fn begin_edit(&mut self, id: TaskId) -> Result<(), TaskError> {
        let idx = self.index_of(id)?;
        let task = &self.tasks[idx];
        self.text_buffer = task.text.clone();
        self.date_buffer = task.due_date.clone().unwrap_or_default();
        self.edit = EditSession::Editing(id);
        debug!(%id, "editing task");
        Ok(())
    }

    /// Leave edit mode and clear the form. No-op when not editing.
    pub fn cancel_edit(&mut self) {
        if let EditSession::Editing(id) = self.edit {
            debug!(%id, "cancelled edit");
            self.edit = EditSession::Idle;
            self.text_buffer.clear();
            self.date_buffer.clear();
        }
    }

    pub fn text_buffer(&self) -> &str {
        &self.text_buffer
    }

    pub fn text_buffer_mut(&mut self) -> &mut String {
        &mut self.text_buffer
    }

    pub fn set_text_buffer(&mut self, text: impl Into<String>) {
        self.text_buffer = text.into();
    }

    pub fn date_buffer(&self) -> &str {
        &self.date_buffer
    }

    pub fn date_buffer_mut(&mut self) -> &mut String {
        &mut self.date_buffer
    }

    pub fn set_date_buffer(&mut self, date: impl Into<String>) {
        self.date_buffer = date.into();
    }

    pub fn edit_session(&self) -> EditSession {
        self.edit
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.edit, EditSession::Editing(_))
    }

    // -----------------------------------------------------------------------
    // Collection
    // -----------------------------------------------------------------------

    /// Flip a task between pending and completed
    pub fn toggle_complete(&mut self, id: TaskId) -> Result<bool, TaskError> {
        let idx = self.index_of(id)?;
        let task = &mut self.tasks[idx];
        task.completed = !task.completed;
        debug!(%id, completed = task.completed, "toggled task");
        Ok(task.completed)
    }

    /// Remove a task; later tasks move up one position.
    /// Deleting the task under edit also ends the edit session.
    pub fn delete_task(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let idx = self.index_of(id)?;
        let removed = self.tasks.remove(idx);
        if self.edit == EditSession::Editing(id) {
            self.cancel_edit();
        }
        debug!(%id, "deleted task");
        Ok(removed)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Position of a task in insertion order
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Id of the task at a position in insertion order
    pub fn id_at(&self, index: usize) -> Option<TaskId> {
        self.tasks.get(index).map(|t| t.id)
    }

    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskCounts {
            all: self.tasks.len(),
            completed,
            pending: self.tasks.len() - completed,
        }
    }

    // -----------------------------------------------------------------------
    // Filter
    // -----------------------------------------------------------------------

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Tasks matching the current filter, in insertion order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    fn index_of(&self, id: TaskId) -> Result<usize, TaskError> {
        self.position(id).ok_or(TaskError::NotFound(id))
    }

    fn alloc_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }
}
