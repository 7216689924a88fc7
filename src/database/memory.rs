// ABOUTME: In-memory analytics store holding both log tables behind a lock
// ABOUTME: Used by tests and demos; can be switched offline to exercise error paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::AnalyticsStore;
use async_trait::async_trait;
use liftlog_core::errors::{AppError, AppResult};
use liftlog_core::models::{ExerciseSet, WeightSample};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    weight_log: Vec<WeightSample>,
    workout_log: Vec<ExerciseSet>,
}

/// Lock-guarded in-process store
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
    offline: Arc<AtomicBool>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with both tables
    #[must_use]
    pub fn with_data(weight_log: Vec<WeightSample>, workout_log: Vec<ExerciseSet>) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables {
                weight_log,
                workout_log,
            })),
            offline: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent call fail with a database error
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> AppResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(AppError::database("In-memory store is offline"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AnalyticsStore for MemoryStore {
    async fn migrate(&self) -> AppResult<()> {
        self.check_online()
    }

    async fn fetch_weight_samples(&self) -> AppResult<Vec<WeightSample>> {
        self.check_online()?;
        let mut samples = self.tables.read().await.weight_log.clone();
        samples.sort_by_key(|s| s.date);
        Ok(samples)
    }

    async fn fetch_exercise_sets(&self) -> AppResult<Vec<ExerciseSet>> {
        self.check_online()?;
        Ok(self.tables.read().await.workout_log.clone())
    }

    async fn replace_weight_samples(&self, samples: &[WeightSample]) -> AppResult<usize> {
        self.check_online()?;
        self.tables.write().await.weight_log = samples.to_vec();
        Ok(samples.len())
    }

    async fn replace_exercise_sets(&self, sets: &[ExerciseSet]) -> AppResult<usize> {
        self.check_online()?;
        self.tables.write().await.workout_log = sets.to_vec();
        Ok(sets.len())
    }

    async fn ping(&self) -> AppResult<()> {
        self.check_online()
    }
}
