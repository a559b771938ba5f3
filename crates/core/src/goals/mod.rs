//! Goals module - domain models, services, and traits.

mod achievements;
mod goals_model;
mod goals_repository;
mod goals_service;
mod goals_traits;

#[cfg(test)]
mod goals_service_tests;

pub use achievements::newly_unlocked;
pub use goals_model::Goal;
pub use goals_repository::GoalRepository;
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
