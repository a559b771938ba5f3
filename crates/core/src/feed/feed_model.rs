//! Activity feed domain models.

use serde::{Deserialize, Serialize};

/// A display-only feed entry. `user` is `"System"` for automated
/// entries or the current display name for user posts; `timestamp` is
/// formatted once at creation and never reinterpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: i64,
    pub user: String,
    pub message: String,
    pub timestamp: String,
}
