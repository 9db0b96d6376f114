use serde::Serialize;

use crate::constants::{
    ERR_CATEGORY, ERR_DAYWORD, ERR_LANGUAGE, ERR_USERNAME, MAX_DAYWORD, MAX_USERNAME_LEN,
    MIN_DAYWORD, RESERVED_USERNAME,
};
use crate::error::{AppError, Result};
use crate::models::Category;

/// Language the learner studies in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Language {
    /// Korean
    K,
    /// Japanese
    J,
}

impl Language {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "K" => Some(Language::K),
            "J" => Some(Language::J),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::K => "K",
            Language::J => "J",
        }
    }
}

/// Settings read back from the users table at login
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserProfile {
    pub language: String,
    pub dayword: i64,
    pub category: String,
}

/// A sign-up request that passed field validation
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub language: Language,
    pub dayword: i64,
    pub category: Category,
}

impl NewUser {
    /// Validate sign-up fields in order; the first failing field decides the error
    ///
    /// `dayword` is `None` when the request value could not be read as an integer.
    /// Category existence and username uniqueness need the database and are
    /// checked by the service afterwards.
    pub fn validate(
        username: Option<&str>,
        language: Option<&str>,
        dayword: Option<i64>,
        category: Option<&str>,
    ) -> Result<Self> {
        let username = username
            .filter(|name| Self::validate_username(name))
            .ok_or(AppError::InvalidInput(ERR_USERNAME))?;

        let language = language
            .and_then(Language::parse)
            .ok_or(AppError::InvalidInput(ERR_LANGUAGE))?;

        let dayword = dayword
            .filter(|n| (MIN_DAYWORD..=MAX_DAYWORD).contains(n))
            .ok_or(AppError::InvalidInput(ERR_DAYWORD))?;

        let category = category
            .and_then(Category::parse)
            .ok_or(AppError::InvalidInput(ERR_CATEGORY))?;

        Ok(Self {
            username: username.to_string(),
            language,
            dayword,
            category,
        })
    }

    /// Non-empty, not the client placeholder, at most 15 characters
    pub fn validate_username(name: &str) -> bool {
        !name.is_empty() && name != RESERVED_USERNAME && name.chars().count() <= MAX_USERNAME_LEN
    }
}
