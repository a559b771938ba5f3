use chrono::{DateTime, Utc};

use super::notifications_model::{Notification, NotificationKind};

/// Trait for notification emission and lifecycle.
///
/// `notify` must be fast and non-blocking; services call it after
/// mutations and on validation failures.
pub trait NotificationServiceTrait: Send + Sync {
    /// Emits a notification and returns it.
    fn notify(&self, message: &str, kind: NotificationKind) -> Notification;

    /// Returns all notifications that have not been dismissed or purged.
    fn active(&self) -> Vec<Notification>;

    /// Dismisses a notification by id. Dismissing an unknown or
    /// already-dismissed id is a no-op.
    fn dismiss(&self, id: i64);

    /// Removes every notification whose deadline is at or before `now`.
    /// Returns the number removed.
    fn purge_expired(&self, now: DateTime<Utc>) -> usize;
}
