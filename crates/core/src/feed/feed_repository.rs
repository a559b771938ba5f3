use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use chrono::Utc;

use super::feed_model::FeedItem;
use super::feed_traits::FeedRepositoryTrait;
use crate::constants::FEED_TIMESTAMP_FORMAT;

/// In-memory feed store with a monotonic id counter.
pub struct FeedRepository {
    items: RwLock<Vec<FeedItem>>,
    next_id: AtomicI64,
}

impl FeedRepository {
    pub fn new() -> Self {
        FeedRepository {
            items: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for FeedRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedRepositoryTrait for FeedRepository {
    fn list(&self) -> Vec<FeedItem> {
        self.items.read().unwrap().clone()
    }

    fn append(&self, user: &str, message: &str) -> FeedItem {
        let item = FeedItem {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            user: user.to_string(),
            message: message.to_string(),
            timestamp: Utc::now().format(FEED_TIMESTAMP_FORMAT).to_string(),
        };
        self.items.write().unwrap().push(item.clone());
        item
    }
}
