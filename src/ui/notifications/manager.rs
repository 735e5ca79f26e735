// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` queues notifications, limits how many are visible at
//! once, and expires them on tick.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting for a visible slot.
    queue: VecDeque<Notification>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification, displaying it immediately if a slot
    /// is free and queueing it otherwise.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by ID. Returns `true` if it was found.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Expires notifications that have outlived their display duration.
    /// Call periodically (the app's tick subscription does).
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Visible notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_front(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;
    use std::time::Duration;

    #[test]
    fn push_displays_up_to_the_visible_limit() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE + 2 {
            manager.push(Notification::new(Severity::Info, format!("key-{i}")));
        }

        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert!(manager.has_notifications());
    }

    #[test]
    fn dismiss_promotes_queued_notifications() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE + 1 {
            manager.push(Notification::new(Severity::Info, format!("key-{i}")));
        }
        let first_visible = manager.visible().next().unwrap().id();

        assert!(manager.dismiss(first_visible));

        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        let keys: Vec<&str> = manager.visible().map(|n| n.message_key()).collect();
        assert!(keys.contains(&"key-3"));
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("key"));
        let bogus = Notification::warning("other").id();
        assert!(!manager.dismiss(bogus));
        assert_eq!(manager.visible().count(), 1);
    }

    #[test]
    fn tick_expires_old_notifications_but_keeps_errors() {
        let mut manager = Manager::new();
        let mut stale = Notification::warning("stale");
        stale.backdate(Duration::from_secs(60));
        let mut error = Notification::error("sticky");
        error.backdate(Duration::from_secs(60));
        manager.push(stale);
        manager.push(error);

        manager.tick();

        let keys: Vec<&str> = manager.visible().map(|n| n.message_key()).collect();
        assert_eq!(keys, ["sticky"]);
    }
}
