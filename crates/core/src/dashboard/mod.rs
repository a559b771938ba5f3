//! Dashboard module - the session facade and derived aggregates.

mod dashboard_model;
mod dashboard_session;
mod seed;


pub use dashboard_model::DashboardSummary;
pub use dashboard_session::DashboardSession;
