// ABOUTME: Analytics engine for fitness logs: sessions, progress flags, staleness, weight trend
// ABOUTME: Every function is pure and recomputes from raw observations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Liftlog Intelligence
//!
//! The pipeline is `sets -> aggregate_sessions -> classify_progress ->
//! rank_staleness`. `weight_trend` runs independently over body-weight
//! samples. Nothing here mutates shared state, so concurrent requests can
//! run the whole pipeline without coordination.

/// Per-day, per-exercise session aggregation
pub mod sessions;

/// Progress classification against the immediately preceding session
pub mod progress;

/// Days-since-progress per identity and the global most-stale selection
pub mod staleness;

/// Trailing rolling average and day-over-day change for body weight
pub mod weight_trend;

pub use progress::{classify_progress, FlaggedSession};
pub use sessions::{aggregate_sessions, SessionTotals};
pub use staleness::{rank_staleness, MostStale, StalenessRecord, StalenessReport};
pub use weight_trend::{normalize_samples, weight_trend, WeightSummary, WeightTrendPoint};
