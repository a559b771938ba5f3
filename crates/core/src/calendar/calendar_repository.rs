use std::sync::RwLock;

use super::calendar_model::CalendarEvent;
use super::calendar_traits::CalendarRepositoryTrait;

/// In-memory, seed-once calendar store.
#[derive(Default)]
pub struct CalendarRepository {
    events: RwLock<Vec<CalendarEvent>>,
}

impl CalendarRepository {
    pub fn new() -> Self {
        CalendarRepository {
            events: RwLock::new(Vec::new()),
        }
    }

    /// Replaces the seeded events. Intended for session construction
    /// only; events are read-only afterwards.
    pub fn seed(&self, events: Vec<CalendarEvent>) {
        *self.events.write().unwrap() = events;
    }
}

impl CalendarRepositoryTrait for CalendarRepository {
    fn list(&self) -> Vec<CalendarEvent> {
        self.events.read().unwrap().clone()
    }
}
