//! Group domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a savings group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i64,
    pub name: String,
    /// Running total of contributions; never decreases.
    pub total_contributions: Decimal,
    /// Free-text payout date as entered by the user, `"TBD"` by default.
    pub next_payout: String,
    /// Never empty after creation.
    pub members: Vec<String>,
}

/// Input model for creating a group. Raw form text has already been
/// validated and defaulted by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroup {
    pub name: String,
    pub total_contributions: Decimal,
    pub next_payout: String,
    pub members: Vec<String>,
}

/// Sort options for the group list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupSort {
    /// Lexicographic ascending by name (case-insensitive).
    Name,
    /// Ascending by parsed payout date; unparsable dates sort last.
    Payout,
    /// Descending by total contributions.
    Contributions,
}

impl GroupSort {
    /// Parses the host's raw sort selector. Unrecognized values mean
    /// "keep insertion order".
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "name" => Some(GroupSort::Name),
            "payout" => Some(GroupSort::Payout),
            "contributions" => Some(GroupSort::Contributions),
            _ => None,
        }
    }
}

/// Per-member detail row for the group-details view (read-only seed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMemberDetail {
    pub name: String,
    pub contributed: Decimal,
    pub next_contribution: String,
}

/// One scheduled payout for the group-details view (read-only seed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutScheduleEntry {
    pub date: String,
    pub member: String,
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn group_serializes_with_camel_case_keys() {
        let group = Group {
            id: 1,
            name: "Family Savings".to_string(),
            total_contributions: dec!(4520),
            next_payout: "Feb 10th, 2025".to_string(),
            members: vec!["John".to_string(), "Jane".to_string()],
        };

        let json = serde_json::to_string(&group).unwrap();
        assert!(json.contains(r#""totalContributions""#));
        assert!(json.contains(r#""nextPayout""#));

        let deserialized: Group = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, group);
    }

    #[test]
    fn group_sort_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&GroupSort::Contributions).unwrap(),
            r#""contributions""#
        );
        let sort: GroupSort = serde_json::from_str(r#""payout""#).unwrap();
        assert_eq!(sort, GroupSort::Payout);
    }
}
