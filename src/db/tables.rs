/// Users table: username -> language, daily word count, category, created_at
pub const USERS: &str = "users";

/// Per-user word queue: (username, number) -> word, status
pub const ASSIGNMENTS: &str = "assignments";

/// Login history: id -> username, start_time, streak, status
pub const LOGIN_RECORDS: &str = "login_records";

/// Tables that must exist before the service can answer requests
pub const REQUIRED: [&str; 3] = [USERS, ASSIGNMENTS, LOGIN_RECORDS];
