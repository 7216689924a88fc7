// ABOUTME: Analytics service answering the dashboard queries from store snapshots
// ABOUTME: Weight trend, sessions, progress staleness, summary stats, and the raw log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Every query reads a fresh snapshot and recomputes; nothing derived is cached.

use crate::clock::Clock;
use crate::database::AnalyticsStore;
use liftlog_core::errors::AppResult;
use liftlog_core::models::{DateWindow, ExerciseSet, WorkoutSession};
use liftlog_intelligence::{
    aggregate_sessions, classify_progress, rank_staleness, weight_trend, SessionTotals,
    StalenessRecord, StalenessReport, WeightSummary, WeightTrendPoint,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// Session with its dashboard label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRow {
    /// Aggregated session
    #[serde(flatten)]
    pub session: WorkoutSession,
    /// `"Exercise"` or `"Exercise (side)"`
    pub exercise_label: String,
}

impl From<WorkoutSession> for SessionRow {
    fn from(session: WorkoutSession) -> Self {
        Self {
            exercise_label: session.exercise_label(),
            session,
        }
    }
}

/// Raw logged set with its volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRow {
    /// The set as stored
    #[serde(flatten)]
    pub set: ExerciseSet,
    /// `weight_lbs * reps` when both are present
    pub volume: Option<f64>,
}

/// Dashboard summary card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    /// First weight reading, 0 without readings
    pub start_weight: f64,
    /// Latest weight reading, 0 without readings
    pub current_weight: f64,
    /// Net change rounded to one decimal place
    pub weight_change: f64,
    /// Distinct training dates
    pub total_sessions: usize,
    /// Volume across all sessions
    pub total_volume: f64,
    /// First weight reading date, empty without readings
    pub start_date: String,
    /// Label of the most stale exercise, empty when none qualifies
    pub most_stale: String,
    /// Days since that exercise last progressed, 0 when none qualifies
    pub most_stale_days: i64,
}

/// Dashboard query service
#[derive(Clone)]
pub struct AnalyticsService {
    store: Arc<dyn AnalyticsStore>,
    clock: Arc<dyn Clock>,
}

impl AnalyticsService {
    /// Create a service over a store and a reference-date source
    #[must_use]
    pub fn new(store: Arc<dyn AnalyticsStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Weight chart points whose date falls inside `window`
    ///
    /// The rolling average is computed over the whole history first, so the
    /// first point of a window still averages the readings before it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails
    pub async fn weight_series(&self, window: &DateWindow) -> AppResult<Vec<WeightTrendPoint>> {
        let samples = self.store.fetch_weight_samples().await?;
        let points: Vec<WeightTrendPoint> = weight_trend(&samples)
            .into_iter()
            .filter(|point| window.contains(point.date))
            .collect();
        debug!(samples = samples.len(), points = points.len(), "Computed weight series");
        Ok(points)
    }

    /// Aggregated sessions inside `window`
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails
    pub async fn sessions(&self, window: &DateWindow) -> AppResult<Vec<SessionRow>> {
        let sets = self.store.fetch_exercise_sets().await?;
        Ok(aggregate_sessions(&sets, window)
            .into_iter()
            .map(SessionRow::from)
            .collect())
    }

    /// Staleness table over the full history
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails
    pub async fn progress(&self) -> AppResult<Vec<StalenessRecord>> {
        Ok(self.staleness_report().await?.records)
    }

    /// Summary over the full history of both logs
    ///
    /// # Errors
    ///
    /// Returns an error if either store read fails
    pub async fn summary(&self) -> AppResult<StatsResponse> {
        let samples = self.store.fetch_weight_samples().await?;
        let sets = self.store.fetch_exercise_sets().await?;

        let weight = WeightSummary::from_samples(&samples);
        let sessions = aggregate_sessions(&sets, &DateWindow::all());
        let totals = SessionTotals::from_sessions(&sessions);
        let report = rank_staleness(&classify_progress(&sessions), self.clock.today());

        let (most_stale, most_stale_days) = report
            .most_stale
            .map_or_else(
                || (String::new(), 0),
                |m| (m.exercise_label, m.days_since_progress),
            );

        Ok(StatsResponse {
            start_weight: weight.start_weight,
            current_weight: weight.current_weight,
            weight_change: weight.weight_change,
            total_sessions: totals.total_sessions,
            total_volume: totals.total_volume,
            start_date: weight
                .start_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            most_stale,
            most_stale_days,
        })
    }

    /// Raw sets inside `window`, newest date first
    ///
    /// Within a date: exercise, then side (none first), then set number
    /// (numbered sets first).
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails
    pub async fn workout_log(&self, window: &DateWindow) -> AppResult<Vec<LogRow>> {
        let mut sets: Vec<ExerciseSet> = self
            .store
            .fetch_exercise_sets()
            .await?
            .into_iter()
            .filter(|set| window.contains(set.date))
            .collect();
        sets.sort_by(compare_log_rows);

        Ok(sets
            .into_iter()
            .map(|set| LogRow {
                volume: set.volume(),
                set,
            })
            .collect())
    }

    /// Store liveness, for readiness checks
    ///
    /// # Errors
    ///
    /// Returns an error if the store does not answer
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    async fn staleness_report(&self) -> AppResult<StalenessReport> {
        let sets = self.store.fetch_exercise_sets().await?;
        let sessions = aggregate_sessions(&sets, &DateWindow::all());
        Ok(rank_staleness(&classify_progress(&sessions), self.clock.today()))
    }
}

fn compare_log_rows(a: &ExerciseSet, b: &ExerciseSet) -> Ordering {
    let rank = |set: &ExerciseSet| (set.set_number.is_none(), set.set_number);
    b.date
        .cmp(&a.date)
        .then_with(|| a.exercise.cmp(&b.exercise))
        .then_with(|| a.side.cmp(&b.side))
        .then_with(|| rank(a).cmp(&rank(b)))
}
