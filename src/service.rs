//! Word/Streak Service
//!
//! Domain rules for accounts, word batches and login streaks, expressed as
//! queries against the relational store. Handlers call exactly one method per
//! request; every method that touches more than one row set runs in a single
//! transaction, which rolls back when dropped on an error path.
//!
//! SQLite admits one writer at a time, and a deferred transaction that reads
//! before it writes fails immediately instead of waiting for the lock. Write
//! transactions therefore take `writer` first, so they queue in-process.

use chrono::{Local, NaiveDateTime};
use rand::seq::SliceRandom;
use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::constants::{
    ASSIGNMENT_INSERT_CHUNK, CATEGORY_PREFIX, ERR_CATEGORY, ERR_INVALID_TABLE_NAME, ERR_NUMBER,
    SELF_SUPPLIED_CATEGORY, SESSION_COMPLETED, WORD_PENDING,
};
use crate::db::{self, tables};
use crate::error::{AppError, Result};
use crate::models::{
    streak_signal, Category, CategoryName, CompletedSession, LoginSummary, NewUser, UserProfile,
    WordEntry,
};

#[derive(Clone)]
pub struct WordService {
    pool: SqlitePool,
    config: Config,
    writer: Arc<Mutex<()>>,
}

impl WordService {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self {
            pool,
            config,
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Succeeds when the users, assignments and login_records tables all exist
    pub async fn check_readiness(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await?;

        for table in tables::REQUIRED {
            if !db::table_exists(&mut *conn, table).await? {
                tracing::warn!("Readiness check failed: table {} is missing", table);
                return Err(AppError::MissingSchema);
            }
        }

        Ok(())
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        Ok(user_exists(&self.pool, username).await?)
    }

    /// Same answer as `username_exists`; the deletion flow asks before it deletes
    pub async fn check_user_before_delete(&self, username: &str) -> Result<bool> {
        self.username_exists(username).await
    }

    /// Names of every word category table
    pub async fn list_categories(&self) -> Result<Vec<String>> {
        let tables = db::list_tables(&self.pool).await?;

        Ok(tables
            .into_iter()
            .filter(|name| name.starts_with(CATEGORY_PREFIX))
            .collect())
    }

    /// Register a user and, for table categories, give them a shuffled copy of its words
    pub async fn sign_up(&self, new_user: NewUser) -> Result<()> {
        let _writer = self.writer.lock().await;
        let mut tx = self.pool.begin().await?;

        if let Category::Table(name) = &new_user.category {
            if !db::table_exists(&mut *tx, name.as_str()).await? {
                tracing::warn!("Sign-up with unknown category: {}", name.as_str());
                return Err(AppError::InvalidInput(ERR_CATEGORY));
            }
        }

        if user_exists(&mut *tx, &new_user.username).await? {
            tracing::info!("Sign-up for existing username: {}", new_user.username);
            return Err(AppError::UserAlreadyExists);
        }

        sqlx::query(
            "INSERT INTO users (username, language, dayword, category, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(new_user.username.as_str())
        .bind(new_user.language.as_str())
        .bind(new_user.dayword)
        .bind(new_user.category.as_str())
        .bind(Local::now().naive_local())
        .execute(&mut *tx)
        .await
        .map_err(conflict_on_unique_violation)?;

        let mut copied = 0;
        if let Category::Table(name) = &new_user.category {
            let mut words: Vec<String> = sqlx::query_scalar(&format!(
                "SELECT word FROM {} WHERE word IS NOT NULL ORDER BY number",
                name.quoted()
            ))
            .fetch_all(&mut *tx)
            .await?;

            words.shuffle(&mut rand::rng());

            for (chunk_index, chunk) in words.chunks(ASSIGNMENT_INSERT_CHUNK).enumerate() {
                let first = chunk_index * ASSIGNMENT_INSERT_CHUNK;
                let mut builder = QueryBuilder::<Sqlite>::new(
                    "INSERT INTO assignments (username, number, word, status) ",
                );
                builder.push_values(chunk.iter().enumerate(), |mut row, (offset, word)| {
                    row.push_bind(new_user.username.as_str())
                        .push_bind((first + offset + 1) as i64)
                        .push_bind(word.as_str())
                        .push_bind(WORD_PENDING);
                });
                builder.build().execute(&mut *tx).await?;
            }
            copied = words.len();
        }

        tx.commit().await?;

        tracing::info!(
            "New user registered: {} ({} words queued from {})",
            new_user.username,
            copied,
            new_user.category.as_str()
        );

        Ok(())
    }

    /// Record a login now and return the day's settings, word batch and streak signal
    pub async fn login(&self, username: &str) -> Result<LoginSummary> {
        self.login_at(username, Local::now().naive_local()).await
    }

    /// Record a login at `now` (local time)
    pub async fn login_at(&self, username: &str, now: NaiveDateTime) -> Result<LoginSummary> {
        let _writer = self.writer.lock().await;
        let mut tx = self.pool.begin().await?;

        let profile: UserProfile =
            sqlx::query_as("SELECT language, dayword, category FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(AppError::UserNotFound)?;

        sqlx::query("INSERT INTO login_records (username, start_time) VALUES (?, ?)")
            .bind(username)
            .bind(now)
            .execute(&mut *tx)
            .await?;

        // Latest by insertion order, not by start_time
        let last: Option<CompletedSession> = sqlx::query_as(
            "SELECT start_time, streak FROM login_records \
             WHERE username = ? AND status = ? \
             ORDER BY id DESC LIMIT 1",
        )
        .bind(username)
        .bind(SESSION_COMPLETED)
        .fetch_optional(&mut *tx)
        .await?;

        let streak = streak_signal(last.as_ref(), now);

        let today_word = if profile.category == SELF_SUPPLIED_CATEGORY {
            Vec::new()
        } else {
            pending_words(&mut *tx, username, profile.dayword).await?
        };

        tx.commit().await?;

        Ok(LoginSummary {
            language: profile.language,
            dayword: profile.dayword,
            category: profile.category,
            today_word,
            streak,
        })
    }

    /// Up to `n` more pending words, lowest numbers first
    ///
    /// `n` is `None` when the request value was not an integer.
    pub async fn take_more_words(&self, username: &str, n: Option<i64>) -> Result<Vec<WordEntry>> {
        if !user_exists(&self.pool, username).await? {
            return Err(AppError::UserNotFound);
        }

        let n = n
            .filter(|n| *n >= 0)
            .ok_or(AppError::InvalidInput(ERR_NUMBER))?;

        Ok(pending_words(&self.pool, username, n).await?)
    }

    /// Remove a user and their word queue
    pub async fn delete_account(&self, username: &str) -> Result<()> {
        let _writer = self.writer.lock().await;
        let mut tx = self.pool.begin().await?;

        if !user_exists(&mut *tx, username).await? {
            tracing::warn!("Delete attempt for non-existent user: {}", username);
            return Err(AppError::UserNotFound);
        }

        let words = sqlx::query("DELETE FROM assignments WHERE username = ?")
            .bind(username)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if self.config.delete_login_records {
            sqlx::query("DELETE FROM login_records WHERE username = ?")
                .bind(username)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("DELETE FROM users WHERE username = ?")
            .bind(username)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!("Deleted account {} and {} queued words", username, words);

        Ok(())
    }

    /// Create a category table if needed and append `words` to it
    ///
    /// Returns the validated table name. Repeated calls append duplicates.
    pub async fn create_word_category(
        &self,
        table_name: &str,
        words: &[String],
    ) -> Result<CategoryName> {
        let name = CategoryName::parse(table_name).ok_or_else(|| {
            tracing::warn!("Rejected category table name: {:?}", table_name);
            AppError::InvalidInput(ERR_INVALID_TABLE_NAME)
        })?;

        let _writer = self.writer.lock().await;
        let mut tx = self.pool.begin().await?;

        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {} (\
                number INTEGER PRIMARY KEY AUTOINCREMENT, \
                word TEXT\
             )",
            name.quoted()
        ))
        .execute(&mut *tx)
        .await?;

        for chunk in words.chunks(ASSIGNMENT_INSERT_CHUNK) {
            let mut builder =
                QueryBuilder::<Sqlite>::new(format!("INSERT INTO {} (word) ", name.quoted()));
            builder.push_values(chunk, |mut row, word| {
                row.push_bind(word.as_str());
            });
            builder.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::info!(
            "Category {} created or extended with {} words",
            name.as_str(),
            words.len()
        );

        Ok(name)
    }
}

async fn user_exists<'e, E>(executor: E, username: &str) -> std::result::Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let found: Option<String> = sqlx::query_scalar("SELECT username FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(executor)
        .await?;

    Ok(found.is_some())
}

async fn pending_words<'e, E>(
    executor: E,
    username: &str,
    limit: i64,
) -> std::result::Result<Vec<WordEntry>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        "SELECT number, word FROM assignments \
         WHERE username = ? AND status = ? \
         ORDER BY number ASC LIMIT ?",
    )
    .bind(username)
    .bind(WORD_PENDING)
    .bind(limit)
    .fetch_all(executor)
    .await
}

/// A concurrent sign-up can win the race between the existence check and the insert
fn conflict_on_unique_violation(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::UserAlreadyExists
        }
        _ => AppError::Database(err),
    }
}
