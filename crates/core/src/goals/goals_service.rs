use std::str::FromStr;
use std::sync::Arc;
use std::sync::RwLock;

use log::{debug, error};
use num_traits::Zero;
use rust_decimal::Decimal;

use super::achievements;
use super::goals_model::Goal;
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::feed::FeedServiceTrait;
use crate::notifications::{NotificationKind, NotificationServiceTrait};

/// Service for personal savings goals and their achievements.
pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
    feed: Arc<dyn FeedServiceTrait>,
    notifications: Arc<dyn NotificationServiceTrait>,
    /// Unlock-ordered, deduplicated by construction, never shrinks.
    unlocked: RwLock<Vec<String>>,
}

impl GoalService {
    pub fn new(
        repository: Arc<dyn GoalRepositoryTrait>,
        feed: Arc<dyn FeedServiceTrait>,
        notifications: Arc<dyn NotificationServiceTrait>,
    ) -> Self {
        GoalService {
            repository,
            feed,
            notifications,
            unlocked: RwLock::new(Vec::new()),
        }
    }

    fn fail(&self, message: &str) -> crate::errors::Error {
        error!("Goal operation rejected: {}", message);
        self.notifications.notify(message, NotificationKind::Error);
        ValidationError::InvalidInput(message.to_string()).into()
    }
}

impl GoalServiceTrait for GoalService {
    fn goals(&self) -> Vec<Goal> {
        self.repository.list()
    }

    fn add_goal(&self, title: &str, target_text: &str) -> Result<Goal> {
        let title = title.trim();
        if title.is_empty() {
            return Err(self.fail("Goal title is required"));
        }
        let target = match Decimal::from_str(target_text.trim()) {
            Ok(t) if t > Decimal::zero() => t,
            _ => return Err(self.fail("Goal target must be a positive number")),
        };

        let goal = self.repository.insert(title.to_string(), target);
        debug!("Created goal {} '{}'", goal.id, goal.title);

        self.notifications.notify(
            &format!("Goal '{}' added", goal.title),
            NotificationKind::Success,
        );
        self.feed
            .record_system(&format!("New goal: {}", goal.title));
        Ok(goal)
    }

    fn contribute(&self, goal_id: i64, amount: Decimal) -> Result<Option<Goal>> {
        if amount <= Decimal::zero() {
            return Err(self.fail("Contribution must be positive"));
        }

        let goal = match self.repository.add_contribution(goal_id, amount) {
            Some(goal) => goal,
            None => {
                debug!("Contribution to unknown goal {} ignored", goal_id);
                return Ok(None);
            }
        };

        self.notifications.notify(
            &format!("Added ${} to '{}'", amount, goal.title),
            NotificationKind::Success,
        );

        let fresh = {
            let unlocked = self.unlocked.read().unwrap();
            achievements::newly_unlocked(&goal.title, goal.current, goal.target, &unlocked)
        };
        for label in &fresh {
            self.notifications.notify(label, NotificationKind::Info);
            self.feed
                .record_system(&format!("Achievement unlocked: {}", label));
        }
        self.unlocked.write().unwrap().extend(fresh);

        Ok(Some(goal))
    }

    fn remove_goal(&self, goal_id: i64) {
        // Unconditional: removing an unknown goal still "succeeds".
        if let Some(goal) = self.repository.remove(goal_id) {
            self.notifications.notify(
                &format!("Goal '{}' removed", goal.title),
                NotificationKind::Success,
            );
            self.feed
                .record_system(&format!("Goal removed: {}", goal.title));
        }
    }

    fn achievements(&self) -> Vec<String> {
        self.unlocked.read().unwrap().clone()
    }

    fn total_contributions(&self) -> Decimal {
        self.repository
            .list()
            .iter()
            .fold(Decimal::zero(), |acc, g| acc + g.current)
    }
}
