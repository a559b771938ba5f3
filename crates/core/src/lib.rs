//! Susu Core - Domain entities, services, and traits.
//!
//! This crate contains the view-model for the Susu rotating-savings
//! dashboard. All state is in-memory and session-scoped; hosts wire a
//! [`dashboard::DashboardSession`] per user session and render what it
//! exposes.

pub mod auth;
pub mod calendar;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod export;
pub mod feed;
pub mod goals;
pub mod groups;
pub mod notifications;
pub mod polls;
pub mod utils;

// Re-export the session facade and common types
pub use dashboard::{DashboardSession, DashboardSummary};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
