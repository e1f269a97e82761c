use std::time::Duration;

/// Default time a notification stays on screen
pub const DEFAULT_NOTIFY_DURATION: Duration = Duration::from_millis(3000);

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Success,
}

/// A transient status message emitted by a task list operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NoticeKind,
    pub message: String,
    pub duration: Duration,
}

impl Notification {
    pub fn warning(message: impl Into<String>, duration: Duration) -> Self {
        Notification {
            kind: NoticeKind::Warning,
            message: message.into(),
            duration,
        }
    }

    pub fn success(message: impl Into<String>, duration: Duration) -> Self {
        Notification {
            kind: NoticeKind::Success,
            message: message.into(),
            duration,
        }
    }
}

/// Receives notifications. Fire-and-forget: nothing is returned to the caller.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in order (handy for tests and headless use)
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
