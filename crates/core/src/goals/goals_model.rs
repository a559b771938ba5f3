//! Goals domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a personal savings goal.
///
/// `current` starts at zero and may overshoot `target`; it is never
/// clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub target: Decimal,
    pub current: Decimal,
}
