use super::feed_model::FeedItem;

/// Trait for feed storage operations.
pub trait FeedRepositoryTrait: Send + Sync {
    fn list(&self) -> Vec<FeedItem>;
    fn append(&self, user: &str, message: &str) -> FeedItem;
}

/// Trait for feed service operations.
pub trait FeedServiceTrait: Send + Sync {
    /// Returns the feed in chronological (insertion) order.
    fn entries(&self) -> Vec<FeedItem>;

    /// Records an automated entry under the system user.
    fn record_system(&self, message: &str) -> FeedItem;

    /// Records a post under the given display name.
    fn post(&self, user: &str, message: &str) -> FeedItem;
}
