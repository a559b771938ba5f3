use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use log::debug;

use super::notifications_model::{Notification, NotificationKind};
use super::notifications_traits::NotificationServiceTrait;
use crate::constants::NOTIFICATION_TTL_SECONDS;

/// In-memory notification center.
///
/// Each entry carries its expiry deadline; there are no per-entry
/// timers. The host calls `purge_expired` on its display tick.
pub struct NotificationCenter {
    entries: RwLock<Vec<Notification>>,
    next_id: AtomicI64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        NotificationCenter {
            entries: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationServiceTrait for NotificationCenter {
    fn notify(&self, message: &str, kind: NotificationKind) -> Notification {
        let notification = Notification {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            message: message.to_string(),
            kind,
            expires_at: Utc::now() + Duration::seconds(NOTIFICATION_TTL_SECONDS),
        };
        debug!("Notification {}: {}", notification.id, notification.message);
        self.entries.write().unwrap().push(notification.clone());
        notification
    }

    fn active(&self) -> Vec<Notification> {
        self.entries.read().unwrap().clone()
    }

    fn dismiss(&self, id: i64) {
        self.entries.write().unwrap().retain(|n| n.id != id);
    }

    fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.entries.write().unwrap();
        let before = entries.len();
        entries.retain(|n| n.expires_at > now);
        before - entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_assigns_fresh_sequential_ids() {
        let center = NotificationCenter::new();
        let a = center.notify("first", NotificationKind::Success);
        let b = center.notify("second", NotificationKind::Error);
        assert!(b.id > a.id);
        assert_eq!(center.active().len(), 2);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let center = NotificationCenter::new();
        let n = center.notify("bye", NotificationKind::Info);
        center.dismiss(n.id);
        assert!(center.active().is_empty());
        // second removal of the same id must be a no-op
        center.dismiss(n.id);
        assert!(center.active().is_empty());
    }

    #[test]
    fn purge_removes_exactly_the_expired_entries() {
        let center = NotificationCenter::new();
        let n = center.notify("short-lived", NotificationKind::Success);

        assert_eq!(center.purge_expired(n.expires_at - Duration::seconds(1)), 0);
        assert_eq!(center.active().len(), 1);

        // deadline is inclusive
        assert_eq!(center.purge_expired(n.expires_at), 1);
        assert!(center.active().is_empty());
    }
}
