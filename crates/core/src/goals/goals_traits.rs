use rust_decimal::Decimal;

use super::goals_model::Goal;
use crate::errors::Result;

/// Trait for goal storage operations.
pub trait GoalRepositoryTrait: Send + Sync {
    fn list(&self) -> Vec<Goal>;
    fn insert(&self, title: String, target: Decimal) -> Goal;

    /// Adds to a goal's progress. Returns the updated goal, or `None`
    /// when the id matches nothing.
    fn add_contribution(&self, goal_id: i64, amount: Decimal) -> Option<Goal>;

    /// Filters the goal out. Returns the removed goal when it existed.
    fn remove(&self, goal_id: i64) -> Option<Goal>;
}

/// Trait for goal service operations.
pub trait GoalServiceTrait: Send + Sync {
    fn goals(&self) -> Vec<Goal>;

    /// Validates raw form input and creates a goal with zero progress.
    fn add_goal(&self, title: &str, target_text: &str) -> Result<Goal>;

    /// Records a contribution and evaluates achievement thresholds.
    /// Unknown ids are a silent no-op (`Ok(None)`).
    fn contribute(&self, goal_id: i64, amount: Decimal) -> Result<Option<Goal>>;

    /// Unconditionally removes the goal; always succeeds.
    fn remove_goal(&self, goal_id: i64);

    /// Labels unlocked so far, in unlock order. Never shrinks.
    fn achievements(&self) -> Vec<String>;

    /// Sum of all goals' progress.
    fn total_contributions(&self) -> Decimal;
}
