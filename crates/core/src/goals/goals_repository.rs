use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use rust_decimal::Decimal;

use super::goals_model::Goal;
use super::goals_traits::GoalRepositoryTrait;

/// In-memory goal store with a monotonic id counter; removed ids are
/// never handed out again.
pub struct GoalRepository {
    goals: RwLock<Vec<Goal>>,
    next_id: AtomicI64,
}

impl GoalRepository {
    pub fn new() -> Self {
        GoalRepository {
            goals: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for GoalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalRepositoryTrait for GoalRepository {
    fn list(&self) -> Vec<Goal> {
        self.goals.read().unwrap().clone()
    }

    fn insert(&self, title: String, target: Decimal) -> Goal {
        let goal = Goal {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title,
            target,
            current: Decimal::ZERO,
        };
        self.goals.write().unwrap().push(goal.clone());
        goal
    }

    fn add_contribution(&self, goal_id: i64, amount: Decimal) -> Option<Goal> {
        let mut goals = self.goals.write().unwrap();
        let goal = goals.iter_mut().find(|g| g.id == goal_id)?;
        goal.current += amount;
        Some(goal.clone())
    }

    fn remove(&self, goal_id: i64) -> Option<Goal> {
        let mut goals = self.goals.write().unwrap();
        let idx = goals.iter().position(|g| g.id == goal_id)?;
        Some(goals.remove(idx))
    }
}
