//! Application-wide constants.

/// The fixed expense categories the service recognizes, in report order.
pub const COST_CATEGORIES: [&str; 5] = ["food", "health", "housing", "sport", "education"];

/// Built-in demo user, seeded on first run against an empty database.
pub const DEFAULT_USER_ID: i64 = 123123;
pub const DEFAULT_USER_FIRST_NAME: &str = "Mosh";
pub const DEFAULT_USER_LAST_NAME: &str = "Israeli";
