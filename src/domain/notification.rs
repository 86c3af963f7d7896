use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub is_read: bool,
}

/// Header notification feed. Same shape as the to-do list: append-only,
/// per-session, a single boolean toggled by id.
#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    items: Vec<Notification>,
    next_id: u32,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            is_read: false,
        });
        id
    }

    /// Flips read/unread on the matching entry; no-op when absent.
    pub fn toggle_read(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.is_read = !notification.is_read;
                true
            }
            None => false,
        }
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}
