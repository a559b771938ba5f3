//! Notifications module - transient user-facing messages with
//! deterministic auto-dismiss.

mod notifications_model;
mod notifications_service;
mod notifications_traits;

pub use notifications_model::{Notification, NotificationKind};
pub use notifications_service::NotificationCenter;
pub use notifications_traits::NotificationServiceTrait;
