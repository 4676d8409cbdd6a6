// web_app/notify.rs - Transient, non-blocking notifications (toasts)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// How long a toast stays on screen unless dismissed
pub const TOAST_LIFETIME: Duration = Duration::from_millis(4000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

/// Toasts currently on screen, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast and return its id so the caller can schedule dismissal
    pub fn push(&mut self, notification: Notification) -> Uuid {
        let id = notification.id;
        self.items.push(notification);
        id
    }

    /// Remove a toast; dismissing an unknown id is a no-op
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = NotificationQueue::new();
        let first = queue.push(Notification::error("first"));
        let second = queue.push(Notification::info("second"));
        assert_eq!(queue.len(), 2);

        assert!(queue.dismiss(first));
        assert_eq!(queue.items()[0].id, second);
        assert!(!queue.dismiss(first));

        assert!(queue.dismiss(second));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Notification::error("same");
        let b = Notification::error("same");
        assert_ne!(a.id, b.id);
        assert_eq!(a.level, NotificationLevel::Error);
    }
}
