//! Feed module - chronological log of system and user actions.

mod feed_model;
mod feed_repository;
mod feed_service;
mod feed_traits;

pub use feed_model::FeedItem;
pub use feed_repository::FeedRepository;
pub use feed_service::FeedService;
pub use feed_traits::{FeedRepositoryTrait, FeedServiceTrait};
