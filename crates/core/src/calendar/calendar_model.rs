//! Calendar domain models.

use serde::{Deserialize, Serialize};

/// An upcoming contribution or payout date. Seeded at session start
/// and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub description: String,
}
