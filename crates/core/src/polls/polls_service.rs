use std::sync::Arc;

use log::{debug, error};

use super::polls_model::Poll;
use super::polls_traits::{PollRepositoryTrait, PollServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::feed::FeedServiceTrait;
use crate::notifications::{NotificationKind, NotificationServiceTrait};
use crate::utils::split_comma_separated;

/// Service for managing group polls.
pub struct PollService {
    repository: Arc<dyn PollRepositoryTrait>,
    feed: Arc<dyn FeedServiceTrait>,
    notifications: Arc<dyn NotificationServiceTrait>,
}

impl PollService {
    pub fn new(
        repository: Arc<dyn PollRepositoryTrait>,
        feed: Arc<dyn FeedServiceTrait>,
        notifications: Arc<dyn NotificationServiceTrait>,
    ) -> Self {
        PollService {
            repository,
            feed,
            notifications,
        }
    }

    fn fail(&self, message: &str) -> crate::errors::Error {
        error!("Poll operation rejected: {}", message);
        self.notifications.notify(message, NotificationKind::Error);
        ValidationError::InvalidInput(message.to_string()).into()
    }
}

impl PollServiceTrait for PollService {
    fn polls(&self) -> Vec<Poll> {
        self.repository.list()
    }

    fn add_poll(&self, question: &str, options_text: &str) -> Result<Poll> {
        let question = question.trim();
        if question.is_empty() {
            return Err(self.fail("Poll question is required"));
        }
        if options_text.trim().is_empty() {
            return Err(self.fail("At least one poll option is required"));
        }

        let options = split_comma_separated(options_text);
        if options.is_empty() {
            return Err(self.fail("No valid poll options provided"));
        }

        let poll = self.repository.insert(question.to_string(), options);
        debug!("Created poll {} '{}'", poll.id, poll.question);

        self.notifications
            .notify("Poll created", NotificationKind::Success);
        self.feed
            .record_system(&format!("New poll: {}", poll.question));
        Ok(poll)
    }

    fn vote(&self, poll_id: i64, option_id: i64) -> Option<Poll> {
        let updated = self.repository.record_vote(poll_id, option_id);
        if updated.is_none() {
            debug!(
                "Vote on unknown poll {} / option {} ignored",
                poll_id, option_id
            );
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{FeedRepository, FeedService};
    use crate::notifications::NotificationCenter;
    use crate::polls::PollRepository;

    fn service() -> PollService {
        PollService::new(
            Arc::new(PollRepository::new()),
            Arc::new(FeedService::new(Arc::new(FeedRepository::new()))),
            Arc::new(NotificationCenter::new()),
        )
    }

    #[test]
    fn add_poll_assigns_one_based_option_ids() {
        let service = service();
        let poll = service
            .add_poll("Where should the group trip be?", "Accra, Lagos, Nairobi")
            .unwrap();

        assert_eq!(poll.options.len(), 3);
        assert_eq!(poll.options[0].id, 1);
        assert_eq!(poll.options[2].id, 3);
        assert!(poll.options.iter().all(|o| o.votes == 0));
    }

    #[test]
    fn add_poll_validates_question_and_options() {
        let service = service();
        assert!(service.add_poll("  ", "a,b").is_err());
        assert!(service.add_poll("Q?", "   ").is_err());
        // commas but nothing valid between them
        assert!(service.add_poll("Q?", " , ,").is_err());
        assert!(service.polls().is_empty());
    }

    #[test]
    fn vote_increments_exactly_one_option() {
        let service = service();
        let poll = service.add_poll("Q?", "yes, no").unwrap();

        let updated = service.vote(poll.id, 1).unwrap();
        assert_eq!(updated.options[0].votes, 1);
        assert_eq!(updated.options[1].votes, 0);
    }

    #[test]
    fn vote_with_unknown_ids_is_a_no_op() {
        let service = service();
        let poll = service.add_poll("Q?", "yes, no").unwrap();

        assert!(service.vote(999, 1).is_none());
        assert!(service.vote(poll.id, 999).is_none());
        assert!(service.polls()[0].options.iter().all(|o| o.votes == 0));
    }
}
