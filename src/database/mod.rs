// ABOUTME: Storage abstraction for the fitness log tables
// ABOUTME: Defines the AnalyticsStore trait with SQLite and in-memory backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Analytics storage
//!
//! The analytics pipeline only ever reads snapshots of the two log tables.
//! Writes happen through the loader, which replaces a table wholesale.

use async_trait::async_trait;
use liftlog_core::errors::AppResult;
use liftlog_core::models::{ExerciseSet, WeightSample};

/// Backend selection wrapper
pub mod factory;
/// In-memory backend for tests and demos
pub mod memory;
/// Bounded connection retry with exponential backoff
pub mod retry;
/// `SQLite` backend
pub mod sqlite;

pub use factory::Database;
pub use memory::MemoryStore;
pub use retry::{connect_with_retry, retry_with_backoff};
pub use sqlite::SqliteStore;

/// Source of weight samples and exercise sets
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    /// Create tables and indexes if they do not exist
    async fn migrate(&self) -> AppResult<()>;

    /// All weight samples, date ascending, insertion order within a date
    async fn fetch_weight_samples(&self) -> AppResult<Vec<WeightSample>>;

    /// All exercise sets in storage order
    async fn fetch_exercise_sets(&self) -> AppResult<Vec<ExerciseSet>>;

    /// Replace the weight table; returns rows written
    async fn replace_weight_samples(&self, samples: &[WeightSample]) -> AppResult<usize>;

    /// Replace the workout table; returns rows written
    async fn replace_exercise_sets(&self, sets: &[ExerciseSet]) -> AppResult<usize>;

    /// Cheap liveness check
    async fn ping(&self) -> AppResult<()>;
}
