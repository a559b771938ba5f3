//! Groups module - domain models, services, and traits.

mod groups_filter;
mod groups_model;
mod groups_repository;
mod groups_service;
mod groups_traits;

#[cfg(test)]
mod groups_service_tests;

pub use groups_filter::{filter_and_sort, parse_payout_date};
pub use groups_model::{Group, GroupMemberDetail, GroupSort, NewGroup, PayoutScheduleEntry};
pub use groups_repository::GroupRepository;
pub use groups_service::GroupService;
pub use groups_traits::{GroupRepositoryTrait, GroupServiceTrait};
