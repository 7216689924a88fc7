// ABOUTME: SQLite implementation of the analytics store using sqlx
// ABOUTME: Owns the workout_log and weight_log tables and their migrations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::AnalyticsStore;
use crate::config::{DatabaseConfig, DatabaseUrl};
use async_trait::async_trait;
use chrono::NaiveDate;
use liftlog_core::errors::{AppError, AppResult};
use liftlog_core::models::{ExerciseSet, WeightSample};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use tracing::{debug, info};

/// `SQLite`-backed store
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

#[derive(FromRow)]
struct WorkoutLogRow {
    date: NaiveDate,
    day_type: Option<String>,
    exercise: String,
    side: Option<String>,
    set_number: Option<i64>,
    weight_lbs: Option<f64>,
    reps: Option<i64>,
}

impl TryFrom<WorkoutLogRow> for ExerciseSet {
    type Error = AppError;

    fn try_from(row: WorkoutLogRow) -> AppResult<Self> {
        Ok(Self {
            date: row.date,
            day_type: row.day_type,
            exercise: row.exercise,
            side: row.side,
            set_number: to_u32(row.set_number, "set_number")?,
            weight: row.weight_lbs,
            reps: to_u32(row.reps, "reps")?,
        })
    }
}

fn to_u32(value: Option<i64>, column: &str) -> AppResult<Option<u32>> {
    value
        .map(|v| u32::try_from(v).map_err(|_| invalid_column(column, v)))
        .transpose()
}

fn invalid_column(column: &str, value: i64) -> AppError {
    AppError::database(format!("Invalid {column} value in workout_log: {value}"))
}

impl SqliteStore {
    /// Open a pool for the configured database without retrying
    ///
    /// File databases are created if missing, including their parent directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the pool cannot connect
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let pool = match &config.url {
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::storage(format!(
                            "Failed to create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true);
                SqlitePoolOptions::new()
                    .max_connections(config.max_connections.max(1))
                    .connect_with(options)
                    .await
            }
            // Every in-memory connection is its own database, so pin the pool to one
            DatabaseUrl::Memory => {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(SqliteConnectOptions::new().in_memory(true))
                    .await
            }
        }
        .map_err(|e| {
            AppError::database(format!("Failed to connect to {}: {e}", config.url))
                .with_source(e)
        })?;

        debug!(url = %config.url, "Opened SQLite pool");
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl AnalyticsStore for SqliteStore {
    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_log (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                day_type TEXT,
                exercise TEXT NOT NULL,
                side TEXT,
                set_number INTEGER,
                weight_lbs REAL,
                reps INTEGER
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create workout_log table: {e}")))?;

        sqlx::query(
            r"
            CREATE INDEX IF NOT EXISTS idx_workout_log_identity
            ON workout_log(exercise, side, date)
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create workout_log index: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS weight_log (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                weight_lbs REAL NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create weight_log table: {e}")))?;

        info!("Analytics tables migrated");
        Ok(())
    }

    async fn fetch_weight_samples(&self) -> AppResult<Vec<WeightSample>> {
        let rows: Vec<(NaiveDate, f64)> =
            sqlx::query_as(r"SELECT date, weight_lbs FROM weight_log ORDER BY date, id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to fetch weight samples: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(date, weight)| WeightSample::new(date, weight))
            .collect())
    }

    async fn fetch_exercise_sets(&self) -> AppResult<Vec<ExerciseSet>> {
        let rows: Vec<WorkoutLogRow> = sqlx::query_as(
            r"
            SELECT date, day_type, exercise, side, set_number, weight_lbs, reps
            FROM workout_log
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch exercise sets: {e}")))?;

        rows.into_iter().map(ExerciseSet::try_from).collect()
    }

    async fn replace_weight_samples(&self, samples: &[WeightSample]) -> AppResult<usize> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query("DELETE FROM weight_log")
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear weight_log: {e}")))?;

        for sample in samples {
            sqlx::query("INSERT INTO weight_log (date, weight_lbs) VALUES ($1, $2)")
                .bind(sample.date)
                .bind(sample.weight)
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::database(format!("Failed to insert weight sample: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit weight_log: {e}")))?;

        Ok(samples.len())
    }

    async fn replace_exercise_sets(&self, sets: &[ExerciseSet]) -> AppResult<usize> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query("DELETE FROM workout_log")
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear workout_log: {e}")))?;

        for set in sets {
            sqlx::query(
                r"
                INSERT INTO workout_log (date, day_type, exercise, side, set_number, weight_lbs, reps)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ",
            )
            .bind(set.date)
            .bind(&set.day_type)
            .bind(&set.exercise)
            .bind(&set.side)
            .bind(set.set_number.map(i64::from))
            .bind(set.weight)
            .bind(set.reps.map(i64::from))
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert exercise set: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit workout_log: {e}")))?;

        Ok(sets.len())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database ping failed: {e}")))?;
        Ok(())
    }
}
