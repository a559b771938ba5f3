use rust_decimal::Decimal;

use super::groups_model::{Group, GroupMemberDetail, GroupSort, NewGroup, PayoutScheduleEntry};
use crate::errors::Result;

/// Trait for group storage operations.
pub trait GroupRepositoryTrait: Send + Sync {
    fn list(&self) -> Vec<Group>;
    fn insert(&self, new_group: NewGroup) -> Group;

    /// Adds to a group's running total. Returns the updated group, or
    /// `None` when the id matches nothing.
    fn add_contribution(&self, group_id: i64, amount: Decimal) -> Option<Group>;

    fn member_details(&self, group_id: i64) -> Vec<GroupMemberDetail>;
    fn payout_schedule(&self, group_id: i64) -> Vec<PayoutScheduleEntry>;
    fn seed_details(
        &self,
        group_id: i64,
        members: Vec<GroupMemberDetail>,
        schedule: Vec<PayoutScheduleEntry>,
    );
}

/// Trait for group service operations.
pub trait GroupServiceTrait: Send + Sync {
    fn groups(&self) -> Vec<Group>;

    /// Validates raw form input and creates a group.
    fn add_group(
        &self,
        name: &str,
        contributions_text: &str,
        payout_text: &str,
        members_text: &str,
    ) -> Result<Group>;

    /// Records a contribution from raw form input. Unknown ids are a
    /// silent no-op (`Ok(None)`).
    fn contribute(&self, group_id: i64, amount_text: &str) -> Result<Option<Group>>;

    /// Case-insensitive name filter followed by an optional stable sort.
    fn filtered_groups(&self, search_term: &str, sort: Option<GroupSort>) -> Vec<Group>;

    /// Sum of all groups' running totals.
    fn total_contributions(&self) -> Decimal;

    fn member_details(&self, group_id: i64) -> Vec<GroupMemberDetail>;
    fn payout_schedule(&self, group_id: i64) -> Vec<PayoutScheduleEntry>;
}
