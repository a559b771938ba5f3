//! Notification domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
    Info,
}

/// A transient, user-facing message with an absolute auto-dismiss
/// deadline. The host sweeps expired entries with `purge_expired`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::Success).unwrap(),
            r#""success""#
        );
        let kind: NotificationKind = serde_json::from_str(r#""error""#).unwrap();
        assert_eq!(kind, NotificationKind::Error);
    }
}
