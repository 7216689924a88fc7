// ABOUTME: Database factory selecting the store backend at runtime
// ABOUTME: Delegates every AnalyticsStore call to the wrapped backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{connect_with_retry, AnalyticsStore, MemoryStore, SqliteStore};
use crate::config::DatabaseConfig;
use async_trait::async_trait;
use liftlog_core::errors::AppResult;
use liftlog_core::models::{ExerciseSet, WeightSample};
use tracing::info;

/// Store instance wrapper that delegates to the selected implementation
#[derive(Clone)]
pub enum Database {
    /// sqlx `SQLite` pool
    SQLite(SqliteStore),
    /// In-process tables
    Memory(MemoryStore),
}

impl Database {
    /// Connect to the configured database under the retry policy and migrate it
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceUnavailable` when the database stays unreachable
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let store = connect_with_retry(config).await?;
        let database = Self::SQLite(store);
        info!(backend = database.backend_info(), url = %config.url, "Database ready");
        Ok(database)
    }

    /// Get a description of the active backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::SQLite(_) => "SQLite",
            Self::Memory(_) => "In-Memory",
        }
    }
}

impl From<MemoryStore> for Database {
    fn from(store: MemoryStore) -> Self {
        Self::Memory(store)
    }
}

impl From<SqliteStore> for Database {
    fn from(store: SqliteStore) -> Self {
        Self::SQLite(store)
    }
}

#[async_trait]
impl AnalyticsStore for Database {
    async fn migrate(&self) -> AppResult<()> {
        match self {
            Self::SQLite(db) => db.migrate().await,
            Self::Memory(db) => db.migrate().await,
        }
    }

    async fn fetch_weight_samples(&self) -> AppResult<Vec<WeightSample>> {
        match self {
            Self::SQLite(db) => db.fetch_weight_samples().await,
            Self::Memory(db) => db.fetch_weight_samples().await,
        }
    }

    async fn fetch_exercise_sets(&self) -> AppResult<Vec<ExerciseSet>> {
        match self {
            Self::SQLite(db) => db.fetch_exercise_sets().await,
            Self::Memory(db) => db.fetch_exercise_sets().await,
        }
    }

    async fn replace_weight_samples(&self, samples: &[WeightSample]) -> AppResult<usize> {
        match self {
            Self::SQLite(db) => db.replace_weight_samples(samples).await,
            Self::Memory(db) => db.replace_weight_samples(samples).await,
        }
    }

    async fn replace_exercise_sets(&self, sets: &[ExerciseSet]) -> AppResult<usize> {
        match self {
            Self::SQLite(db) => db.replace_exercise_sets(sets).await,
            Self::Memory(db) => db.replace_exercise_sets(sets).await,
        }
    }

    async fn ping(&self) -> AppResult<()> {
        match self {
            Self::SQLite(db) => db.ping().await,
            Self::Memory(db) => db.ping().await,
        }
    }
}
