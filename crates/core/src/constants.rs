/// Author recorded on automated feed entries.
pub const SYSTEM_USER: &str = "System";

/// Display name used for user posts when no one is logged in.
pub const GUEST_USER: &str = "Guest";

/// Session-store key holding the logged-in display name.
pub const LOGGED_IN_USER_KEY: &str = "loggedInUser";

/// Payout date shown for groups created without one.
pub const DEFAULT_PAYOUT: &str = "TBD";

/// Member list substituted when a group is created with no members.
pub const DEFAULT_MEMBER: &str = "Unknown";

/// Seconds a notification stays visible before auto-dismissal.
pub const NOTIFICATION_TTL_SECONDS: i64 = 3;

/// Format for feed-entry timestamps, fixed at creation time.
pub const FEED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File name of the dashboard CSV export artifact.
pub const EXPORT_FILE_NAME: &str = "susu_dashboard_export.csv";

/// Decimal precision for display amounts.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
