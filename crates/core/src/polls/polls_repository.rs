use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use super::polls_model::{Poll, PollOption};
use super::polls_traits::PollRepositoryTrait;

/// In-memory poll store with a monotonic poll-id counter.
pub struct PollRepository {
    polls: RwLock<Vec<Poll>>,
    next_id: AtomicI64,
}

impl PollRepository {
    pub fn new() -> Self {
        PollRepository {
            polls: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for PollRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PollRepositoryTrait for PollRepository {
    fn list(&self) -> Vec<Poll> {
        self.polls.read().unwrap().clone()
    }

    fn insert(&self, question: String, options: Vec<String>) -> Poll {
        let poll = Poll {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            question,
            options: options
                .into_iter()
                .enumerate()
                .map(|(idx, text)| PollOption {
                    id: idx as i64 + 1,
                    text,
                    votes: 0,
                })
                .collect(),
        };
        self.polls.write().unwrap().push(poll.clone());
        poll
    }

    fn record_vote(&self, poll_id: i64, option_id: i64) -> Option<Poll> {
        let mut polls = self.polls.write().unwrap();
        let poll = polls.iter_mut().find(|p| p.id == poll_id)?;
        let option = poll.options.iter_mut().find(|o| o.id == option_id)?;
        option.votes += 1;
        Some(poll.clone())
    }
}
