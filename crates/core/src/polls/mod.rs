//! Polls module - domain models, services, and traits.

mod polls_model;
mod polls_repository;
mod polls_service;
mod polls_traits;

pub use polls_model::{Poll, PollOption};
pub use polls_repository::PollRepository;
pub use polls_service::PollService;
pub use polls_traits::{PollRepositoryTrait, PollServiceTrait};
