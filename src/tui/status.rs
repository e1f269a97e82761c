use std::time::Instant;

use crate::ops::notify::{Notification, Notifier};

/// Holds the notification currently shown in the status row.
///
/// A new notification replaces the previous one; each expires after its own
/// duration.
#[derive(Debug, Default)]
pub struct StatusLine {
    current: Option<(Notification, Instant)>,
}

impl StatusLine {
    pub fn new() -> Self {
        StatusLine::default()
    }

    /// The message to show, if it has not expired yet
    pub fn active(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(n, _)| n)
    }

    /// Drop the current message once `now` is past its expiry
    pub fn tick(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|(_, expires)| now >= *expires)
        {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    fn show_at(&mut self, notification: Notification, now: Instant) {
        let expires = now + notification.duration;
        self.current = Some((notification, expires));
    }
}

impl Notifier for StatusLine {
    fn notify(&mut self, notification: Notification) {
        self.show_at(notification, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn shows_until_expiry() {
        let mut status = StatusLine::new();
        let start = Instant::now();
        status.show_at(
            Notification::success("Task added", Duration::from_millis(3000)),
            start,
        );

        status.tick(start + Duration::from_millis(2999));
        assert_eq!(status.active().map(|n| n.message.as_str()), Some("Task added"));

        status.tick(start + Duration::from_millis(3000));
        assert!(status.active().is_none());
    }

    #[test]
    fn newer_message_replaces_older() {
        let mut status = StatusLine::new();
        status.notify(Notification::warning("first", Duration::from_secs(5)));
        status.notify(Notification::success("second", Duration::from_secs(5)));
        assert_eq!(status.active().map(|n| n.message.as_str()), Some("second"));
    }
}
