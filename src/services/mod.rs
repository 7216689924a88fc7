// ABOUTME: Domain service layer between the HTTP routes and the analytics engine
// ABOUTME: Fetches store snapshots and runs the pure analytics over them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold no route or protocol types, so the same queries back the
//! HTTP API and the integration tests.

/// Dashboard analytics queries
pub mod analytics;

pub use analytics::{AnalyticsService, LogRow, SessionRow, StatsResponse};
