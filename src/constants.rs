/// Maximum username length in characters
pub const MAX_USERNAME_LEN: usize = 15;

/// Placeholder text the client shows in an empty username field
pub const RESERVED_USERNAME: &str = "Username";

/// Accepted range for a user's daily word count
pub const MIN_DAYWORD: i64 = 10;
pub const MAX_DAYWORD: i64 = 25;

/// Category value meaning the user supplies their own words
pub const SELF_SUPPLIED_CATEGORY: &str = "add_yourself";

/// Every word category lives in a table carrying this prefix
pub const CATEGORY_PREFIX: &str = "word_";

/// Maximum category table name length
pub const MAX_CATEGORY_NAME_LEN: usize = 20;

/// Assignment status for words not yet consumed by the learning flow
pub const WORD_PENDING: &str = "-1";

/// Login record status written by the session collaborator once a day's session is done
pub const SESSION_COMPLETED: &str = "o";

/// Hour of the local day at which a new learning day begins
pub const DAY_BOUNDARY_HOUR: u32 = 5;

/// Rows per bulk insert when copying a category into a user's queue
/// 4 binds per row keeps each statement well under SQLite's variable limit
pub const ASSIGNMENT_INSERT_CHUNK: usize = 200;

// =============================================================================
// Streak Signals
// =============================================================================

/// No completed session exists for the user
pub const STREAK_FIRST_LOGIN: i64 = -2;

/// The user already completed today's session
pub const STREAK_DONE_TODAY: i64 = -1;

/// The last completed session is older than yesterday
pub const STREAK_BROKEN: i64 = 0;

// =============================================================================
// Error Messages
// =============================================================================

pub const ERR_USERNAME: &str = "username error";
pub const ERR_LANGUAGE: &str = "language error";
pub const ERR_DAYWORD: &str = "dayword error";
pub const ERR_CATEGORY: &str = "category error";
pub const ERR_NUMBER: &str = "number error";
pub const ERR_INVALID_REQUEST: &str = "Invalid request data";
pub const ERR_INVALID_TABLE_NAME: &str = "Invalid table name";
