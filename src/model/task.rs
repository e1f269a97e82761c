use std::fmt;

/// Stable identifier assigned to a task when it is created.
///
/// Ids are never reused within one [`TaskList`](crate::ops::task_list::TaskList),
/// so a captured id stays valid across deletes of other tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Description text, never blank
    pub text: String,
    pub completed: bool,
    /// Due date as entered in the date field (`None` = no date set)
    pub due_date: Option<String>,
}

impl Task {
    /// Create a pending task. An empty or whitespace-only date means "no date".
    pub fn new(id: TaskId, text: String, due_date: &str) -> Self {
        Task {
            id,
            text,
            completed: false,
            due_date: normalize_due_date(due_date),
        }
    }

    /// Due date for display, with the placeholder used when none is set
    pub fn due_label(&self) -> &str {
        self.due_date.as_deref().unwrap_or("No date set")
    }
}

/// Map a raw date buffer to the stored due date
pub fn normalize_due_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_pending() {
        let task = Task::new(TaskId(1), "Buy milk".into(), "2024-01-01");
        assert!(!task.completed);
        assert_eq!(task.due_date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn blank_date_means_no_date() {
        let task = Task::new(TaskId(1), "Buy milk".into(), "   ");
        assert_eq!(task.due_date, None);
        assert_eq!(task.due_label(), "No date set");
    }

    #[test]
    fn task_id_display() {
        assert_eq!(TaskId(42).to_string(), "#42");
    }
}
