use chrono::{Days, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::constants::{DAY_BOUNDARY_HOUR, STREAK_BROKEN, STREAK_DONE_TODAY, STREAK_FIRST_LOGIN};
use crate::models::WordEntry;

/// The latest login record the session flow marked as completed
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompletedSession {
    pub start_time: NaiveDateTime,
    pub streak: i64,
}

/// Everything the client needs to start a day's session
#[derive(Debug, Clone, Serialize)]
pub struct LoginSummary {
    pub language: String,
    pub dayword: i64,
    pub category: String,
    pub today_word: Vec<WordEntry>,
    pub streak: i64,
}

/// Learning day a timestamp belongs to; days start at 05:00, not midnight
pub fn adjusted_date(t: NaiveDateTime) -> NaiveDate {
    let date = t.date();
    if t.hour() >= DAY_BOUNDARY_HOUR {
        date
    } else {
        date.checked_sub_days(Days::new(1)).unwrap_or(date)
    }
}

/// Streak value reported at login
///
/// - `-2` no completed session yet
/// - `-1` today's session is already completed
/// - the stored streak when the last completed session was yesterday
/// - `0` otherwise
pub fn streak_signal(last: Option<&CompletedSession>, now: NaiveDateTime) -> i64 {
    let Some(last) = last else {
        return STREAK_FIRST_LOGIN;
    };

    let last_day = adjusted_date(last.start_time);
    let today = adjusted_date(now);

    if last_day == today {
        STREAK_DONE_TODAY
    } else if Some(last_day) == today.checked_sub_days(Days::new(1)) {
        last.streak
    } else {
        STREAK_BROKEN
    }
}
