use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{MAX_CATEGORY_NAME_LEN, SELF_SUPPLIED_CATEGORY};

static CATEGORY_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^word_[a-z]*$").expect("category name pattern is valid")
});

/// Name of a word category table that passed the allow-list
///
/// Table names cannot be bound as query parameters, so this type is the only
/// way a category name reaches SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    /// Accept `word_` followed by lowercase ASCII letters, at most 20 characters
    pub fn parse(name: &str) -> Option<Self> {
        if name.is_empty() || name.len() > MAX_CATEGORY_NAME_LEN {
            return None;
        }
        if !CATEGORY_NAME_RE.is_match(name) {
            return None;
        }
        Some(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier quoted for interpolation into a statement
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

/// Where a user's words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    /// The user enters their own words
    SelfSupplied,
    /// Words are copied from a category table at sign-up
    Table(CategoryName),
}

impl Category {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == SELF_SUPPLIED_CATEGORY {
            Some(Category::SelfSupplied)
        } else {
            CategoryName::parse(raw).map(Category::Table)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::SelfSupplied => SELF_SUPPLIED_CATEGORY,
            Category::Table(name) => name.as_str(),
        }
    }
}
