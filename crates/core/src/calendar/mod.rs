//! Calendar module - read-only seeded events.

mod calendar_model;
mod calendar_repository;
mod calendar_traits;

pub use calendar_model::CalendarEvent;
pub use calendar_repository::CalendarRepository;
pub use calendar_traits::CalendarRepositoryTrait;
