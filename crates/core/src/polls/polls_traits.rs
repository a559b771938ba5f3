use super::polls_model::Poll;
use crate::errors::Result;

/// Trait for poll storage operations.
pub trait PollRepositoryTrait: Send + Sync {
    fn list(&self) -> Vec<Poll>;

    /// Inserts a poll; options get 1-based sequential ids.
    fn insert(&self, question: String, options: Vec<String>) -> Poll;

    /// Increments the matching option's vote count by one. Returns the
    /// updated poll, or `None` when either id matches nothing.
    fn record_vote(&self, poll_id: i64, option_id: i64) -> Option<Poll>;
}

/// Trait for poll service operations.
pub trait PollServiceTrait: Send + Sync {
    fn polls(&self) -> Vec<Poll>;

    /// Validates raw form input and creates a poll.
    fn add_poll(&self, question: &str, options_text: &str) -> Result<Poll>;

    /// Casts one vote. Unknown ids are a non-fatal no-op.
    fn vote(&self, poll_id: i64, option_id: i64) -> Option<Poll>;
}
