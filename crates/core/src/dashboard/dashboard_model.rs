//! Dashboard aggregate models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived stat-card values, recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_group_contributions: Decimal,
    pub total_goal_contributions: Decimal,
    pub overall_total_contributions: Decimal,
    pub active_groups: usize,
}
