use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use rust_decimal::Decimal;

use super::groups_model::{Group, GroupMemberDetail, NewGroup, PayoutScheduleEntry};
use super::groups_traits::GroupRepositoryTrait;

/// In-memory group store.
///
/// Ids come from a monotonic counter, never from the collection
/// length, so removal can never lead to id reuse.
pub struct GroupRepository {
    groups: RwLock<Vec<Group>>,
    details: RwLock<HashMap<i64, (Vec<GroupMemberDetail>, Vec<PayoutScheduleEntry>)>>,
    next_id: AtomicI64,
}

impl GroupRepository {
    pub fn new() -> Self {
        GroupRepository {
            groups: RwLock::new(Vec::new()),
            details: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for GroupRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupRepositoryTrait for GroupRepository {
    fn list(&self) -> Vec<Group> {
        self.groups.read().unwrap().clone()
    }

    fn insert(&self, new_group: NewGroup) -> Group {
        let group = Group {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: new_group.name,
            total_contributions: new_group.total_contributions,
            next_payout: new_group.next_payout,
            members: new_group.members,
        };
        self.groups.write().unwrap().push(group.clone());
        group
    }

    fn add_contribution(&self, group_id: i64, amount: Decimal) -> Option<Group> {
        let mut groups = self.groups.write().unwrap();
        let group = groups.iter_mut().find(|g| g.id == group_id)?;
        group.total_contributions += amount;
        Some(group.clone())
    }

    fn member_details(&self, group_id: i64) -> Vec<GroupMemberDetail> {
        self.details
            .read()
            .unwrap()
            .get(&group_id)
            .map(|(members, _)| members.clone())
            .unwrap_or_default()
    }

    fn payout_schedule(&self, group_id: i64) -> Vec<PayoutScheduleEntry> {
        self.details
            .read()
            .unwrap()
            .get(&group_id)
            .map(|(_, schedule)| schedule.clone())
            .unwrap_or_default()
    }

    fn seed_details(
        &self,
        group_id: i64,
        members: Vec<GroupMemberDetail>,
        schedule: Vec<PayoutScheduleEntry>,
    ) {
        self.details
            .write()
            .unwrap()
            .insert(group_id, (members, schedule));
    }
}
