use std::sync::Arc;

use log::debug;

use super::feed_model::FeedItem;
use super::feed_traits::{FeedRepositoryTrait, FeedServiceTrait};
use crate::constants::SYSTEM_USER;

/// Service for the chronological activity feed.
pub struct FeedService {
    repository: Arc<dyn FeedRepositoryTrait>,
}

impl FeedService {
    pub fn new(repository: Arc<dyn FeedRepositoryTrait>) -> Self {
        FeedService { repository }
    }
}

impl FeedServiceTrait for FeedService {
    fn entries(&self) -> Vec<FeedItem> {
        self.repository.list()
    }

    fn record_system(&self, message: &str) -> FeedItem {
        debug!("Feed (system): {}", message);
        self.repository.append(SYSTEM_USER, message)
    }

    fn post(&self, user: &str, message: &str) -> FeedItem {
        debug!("Feed ({}): {}", user, message);
        self.repository.append(user, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedRepository;

    #[test]
    fn entries_keep_insertion_order_and_system_author() {
        let service = FeedService::new(Arc::new(FeedRepository::new()));
        service.record_system("Group 'Family Savings' created");
        service.post("Adesola", "Excited to start saving!");

        let entries = service.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].user, SYSTEM_USER);
        assert_eq!(entries[1].user, "Adesola");
        assert!(entries[0].id < entries[1].id);
        assert!(!entries[0].timestamp.is_empty());
    }
}
