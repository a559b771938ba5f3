use std::sync::Arc;

use log::{debug, error};
use num_traits::Zero;
use rust_decimal::Decimal;

use super::groups_filter::filter_and_sort;
use super::groups_model::{Group, GroupMemberDetail, GroupSort, NewGroup, PayoutScheduleEntry};
use super::groups_traits::{GroupRepositoryTrait, GroupServiceTrait};
use crate::constants::{DEFAULT_MEMBER, DEFAULT_PAYOUT};
use crate::errors::{Result, ValidationError};
use crate::feed::FeedServiceTrait;
use crate::notifications::{NotificationKind, NotificationServiceTrait};
use crate::utils::{parse_amount_lenient, parse_positive_amount, split_comma_separated};

/// Service for managing savings groups.
pub struct GroupService {
    repository: Arc<dyn GroupRepositoryTrait>,
    feed: Arc<dyn FeedServiceTrait>,
    notifications: Arc<dyn NotificationServiceTrait>,
}

impl GroupService {
    pub fn new(
        repository: Arc<dyn GroupRepositoryTrait>,
        feed: Arc<dyn FeedServiceTrait>,
        notifications: Arc<dyn NotificationServiceTrait>,
    ) -> Self {
        GroupService {
            repository,
            feed,
            notifications,
        }
    }

    fn fail(&self, message: &str) -> crate::errors::Error {
        error!("Group operation rejected: {}", message);
        self.notifications.notify(message, NotificationKind::Error);
        ValidationError::InvalidInput(message.to_string()).into()
    }
}

impl GroupServiceTrait for GroupService {
    fn groups(&self) -> Vec<Group> {
        self.repository.list()
    }

    fn add_group(
        &self,
        name: &str,
        contributions_text: &str,
        payout_text: &str,
        members_text: &str,
    ) -> Result<Group> {
        let name = name.trim();
        if name.is_empty() {
            return Err(self.fail("Group name is required"));
        }

        // Missing or unparsable starting total coerces to zero.
        let total_contributions = parse_amount_lenient(contributions_text, "contributions");

        let payout = payout_text.trim();
        let next_payout = if payout.is_empty() {
            DEFAULT_PAYOUT.to_string()
        } else {
            payout.to_string()
        };

        let mut members = split_comma_separated(members_text);
        if members.is_empty() {
            members.push(DEFAULT_MEMBER.to_string());
        }

        let group = self.repository.insert(NewGroup {
            name: name.to_string(),
            total_contributions,
            next_payout,
            members,
        });
        debug!("Created group {} '{}'", group.id, group.name);

        self.notifications.notify(
            &format!("Group '{}' created", group.name),
            NotificationKind::Success,
        );
        self.feed
            .record_system(&format!("New group created: {}", group.name));
        Ok(group)
    }

    fn contribute(&self, group_id: i64, amount_text: &str) -> Result<Option<Group>> {
        let amount = parse_positive_amount(amount_text)
            .ok_or_else(|| self.fail("Invalid contribution amount"))?;

        match self.repository.add_contribution(group_id, amount) {
            Some(group) => {
                self.notifications.notify(
                    &format!("Contributed ${} to '{}'", amount, group.name),
                    NotificationKind::Success,
                );
                self.feed.record_system(&format!(
                    "Contribution of ${} recorded for {}",
                    amount, group.name
                ));
                Ok(Some(group))
            }
            // Unknown group id is not an error, per the permissive policy.
            None => {
                debug!("Contribution to unknown group {} ignored", group_id);
                Ok(None)
            }
        }
    }

    fn filtered_groups(&self, search_term: &str, sort: Option<GroupSort>) -> Vec<Group> {
        filter_and_sort(self.repository.list(), search_term, sort)
    }

    fn total_contributions(&self) -> Decimal {
        self.repository
            .list()
            .iter()
            .fold(Decimal::zero(), |acc, g| acc + g.total_contributions)
    }

    fn member_details(&self, group_id: i64) -> Vec<GroupMemberDetail> {
        self.repository.member_details(group_id)
    }

    fn payout_schedule(&self, group_id: i64) -> Vec<PayoutScheduleEntry> {
        self.repository.payout_schedule(group_id)
    }
}
