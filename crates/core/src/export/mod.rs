//! Export module - sectioned CSV serialization of the dashboard state.

mod csv_export;

pub use csv_export::{read_groups_section, write_dashboard_csv};
