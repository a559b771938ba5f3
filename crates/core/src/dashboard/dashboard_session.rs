use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::dashboard_model::DashboardSummary;
use super::seed;
use crate::auth::{AuthService, AuthServiceTrait, MemorySessionStore, SessionStoreTrait};
use crate::calendar::{CalendarEvent, CalendarRepository, CalendarRepositoryTrait};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, GUEST_USER};
use crate::errors::Result;
use crate::export;
use crate::feed::{FeedItem, FeedRepository, FeedService, FeedServiceTrait};
use crate::goals::{Goal, GoalRepository, GoalService, GoalServiceTrait};
use crate::groups::{
    Group, GroupMemberDetail, GroupRepository, GroupService, GroupServiceTrait, GroupSort,
    PayoutScheduleEntry,
};
use crate::notifications::{Notification, NotificationCenter, NotificationServiceTrait};
use crate::polls::{Poll, PollRepository, PollService, PollServiceTrait};

/// The injectable session store owning all dashboard state.
///
/// Hosts construct one per user session, call the operations below
/// with raw form input, and render the collections, notifications,
/// and derived aggregates it exposes. Everything lives in memory and
/// dies with the session.
pub struct DashboardSession {
    auth: Arc<dyn AuthServiceTrait>,
    groups: Arc<dyn GroupServiceTrait>,
    polls: Arc<dyn PollServiceTrait>,
    goals: Arc<dyn GoalServiceTrait>,
    calendar: Arc<dyn CalendarRepositoryTrait>,
    feed: Arc<dyn FeedServiceTrait>,
    notifications: Arc<dyn NotificationServiceTrait>,
}

impl DashboardSession {
    /// Builds an empty session.
    pub fn new() -> Self {
        Self::build(false)
    }

    /// Builds a session populated with the placeholder demo data.
    pub fn with_seed_data() -> Self {
        Self::build(true)
    }

    fn build(seeded: bool) -> Self {
        let notifications = Arc::new(NotificationCenter::new());
        let session_store: Arc<dyn SessionStoreTrait> = Arc::new(MemorySessionStore::new());

        let feed_repository = Arc::new(FeedRepository::new());
        let group_repository = Arc::new(GroupRepository::new());
        let poll_repository = Arc::new(PollRepository::new());
        let goal_repository = Arc::new(GoalRepository::new());
        let calendar_repository = Arc::new(CalendarRepository::new());

        if seeded {
            seed::seed_groups(&group_repository);
            seed::seed_polls(&poll_repository);
            seed::seed_goals(&goal_repository);
            seed::seed_calendar(&calendar_repository);
            seed::seed_feed(&feed_repository);
        }

        let feed: Arc<dyn FeedServiceTrait> =
            Arc::new(FeedService::new(feed_repository.clone()));

        DashboardSession {
            auth: Arc::new(AuthService::new(session_store, notifications.clone())),
            groups: Arc::new(GroupService::new(
                group_repository,
                feed.clone(),
                notifications.clone(),
            )),
            polls: Arc::new(PollService::new(
                poll_repository,
                feed.clone(),
                notifications.clone(),
            )),
            goals: Arc::new(GoalService::new(
                goal_repository,
                feed.clone(),
                notifications.clone(),
            )),
            calendar: calendar_repository,
            feed,
            notifications,
        }
    }

    // --- Auth ---

    pub fn login(&self, email: &str, password: &str) -> Result<()> {
        self.auth.login(email, password)
    }

    pub fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<()> {
        self.auth.signup(name, email, password, confirm_password)
    }

    pub fn display_name(&self) -> Option<String> {
        self.auth.display_name()
    }

    // --- Groups ---

    pub fn groups(&self) -> Vec<Group> {
        self.groups.groups()
    }

    pub fn add_group(
        &self,
        name: &str,
        contributions_text: &str,
        payout_text: &str,
        members_text: &str,
    ) -> Result<Group> {
        self.groups
            .add_group(name, contributions_text, payout_text, members_text)
    }

    pub fn contribute_to_group(&self, group_id: i64, amount_text: &str) -> Result<Option<Group>> {
        self.groups.contribute(group_id, amount_text)
    }

    pub fn filtered_groups(&self, search_term: &str, sort: Option<GroupSort>) -> Vec<Group> {
        self.groups.filtered_groups(search_term, sort)
    }

    pub fn group_member_details(&self, group_id: i64) -> Vec<GroupMemberDetail> {
        self.groups.member_details(group_id)
    }

    pub fn group_payout_schedule(&self, group_id: i64) -> Vec<PayoutScheduleEntry> {
        self.groups.payout_schedule(group_id)
    }

    // --- Polls ---

    pub fn polls(&self) -> Vec<Poll> {
        self.polls.polls()
    }

    pub fn add_poll(&self, question: &str, options_text: &str) -> Result<Poll> {
        self.polls.add_poll(question, options_text)
    }

    pub fn vote_on_poll(&self, poll_id: i64, option_id: i64) -> Option<Poll> {
        self.polls.vote(poll_id, option_id)
    }

    // --- Goals ---

    pub fn goals(&self) -> Vec<Goal> {
        self.goals.goals()
    }

    pub fn add_goal(&self, title: &str, target_text: &str) -> Result<Goal> {
        self.goals.add_goal(title, target_text)
    }

    pub fn contribute_to_goal(&self, goal_id: i64, amount: Decimal) -> Result<Option<Goal>> {
        self.goals.contribute(goal_id, amount)
    }

    pub fn remove_goal(&self, goal_id: i64) {
        self.goals.remove_goal(goal_id)
    }

    pub fn achievements(&self) -> Vec<String> {
        self.goals.achievements()
    }

    // --- Calendar & feed ---

    pub fn calendar_events(&self) -> Vec<CalendarEvent> {
        self.calendar.list()
    }

    pub fn feed(&self) -> Vec<FeedItem> {
        self.feed.entries()
    }

    /// Posts a feed update under the logged-in display name.
    pub fn post_update(&self, message: &str) -> FeedItem {
        let user = self
            .display_name()
            .unwrap_or_else(|| GUEST_USER.to_string());
        self.feed.post(&user, message)
    }

    // --- Notifications ---

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.active()
    }

    pub fn dismiss_notification(&self, id: i64) {
        self.notifications.dismiss(id)
    }

    pub fn purge_expired_notifications(&self, now: DateTime<Utc>) -> usize {
        self.notifications.purge_expired(now)
    }

    // --- Derived aggregates & export ---

    pub fn summary(&self) -> DashboardSummary {
        let total_group_contributions = self
            .groups
            .total_contributions()
            .round_dp(DISPLAY_DECIMAL_PRECISION);
        let total_goal_contributions = self
            .goals
            .total_contributions()
            .round_dp(DISPLAY_DECIMAL_PRECISION);
        DashboardSummary {
            total_group_contributions,
            total_goal_contributions,
            overall_total_contributions: total_group_contributions + total_goal_contributions,
            active_groups: self.groups.groups().len(),
        }
    }

    pub fn export_csv(&self) -> Result<String> {
        export::write_dashboard_csv(
            &self.groups.groups(),
            &self.polls.polls(),
            &self.goals.goals(),
            &self.feed.entries(),
        )
    }
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new()
    }
}
