//! RoaD Vocabulary Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod service;

pub use config::Config;
pub use error::{AppError, Result};
pub use routes::router;
pub use service::WordService;

use sqlx::SqlitePool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: WordService,
}

impl AppState {
    /// Create a new AppState with the given database pool and configuration
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self {
            service: WordService::new(pool, config),
        }
    }
}
