// ABOUTME: Dashboard analytics route handlers under /api
// ABOUTME: Weight trend, sessions, progress, summary stats, and raw log endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::resources::ServerResources;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use liftlog_core::errors::{AppError, AppResult};
use liftlog_core::models::DateWindow;
use serde::Deserialize;
use std::sync::Arc;

/// Optional inclusive date bounds, `YYYY-MM-DD`
#[derive(Debug, Default, Deserialize)]
pub struct WindowQuery {
    /// First date included
    pub from: Option<String>,
    /// Last date included
    pub to: Option<String>,
}

impl WindowQuery {
    /// Validate into a [`DateWindow`]
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for unparseable dates or `from` after `to`
    pub fn to_window(&self) -> AppResult<DateWindow> {
        let from = parse_bound("from", self.from.as_deref())?;
        let to = parse_bound("to", self.to.as_deref())?;
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(AppError::invalid_input(format!(
                    "'from' ({from}) is after 'to' ({to})"
                )));
            }
        }
        Ok(DateWindow::between(from, to))
    }
}

fn parse_bound(name: &str, raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|value| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                AppError::invalid_input(format!(
                    "Invalid '{name}' date '{value}', expected YYYY-MM-DD"
                ))
            })
        })
        .transpose()
}

/// Analytics routes implementation
pub struct AnalyticsRoutes;

impl AnalyticsRoutes {
    /// Create all analytics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/weight", get(Self::handle_weight))
            .route("/api/sessions", get(Self::handle_sessions))
            .route("/api/progress", get(Self::handle_progress))
            .route("/api/stats", get(Self::handle_stats))
            .route("/api/log", get(Self::handle_log))
            .with_state(resources)
    }

    async fn handle_weight(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<WindowQuery>,
    ) -> Result<Response, AppError> {
        let window = params.to_window()?;
        let points = resources.analytics.weight_series(&window).await?;
        Ok((StatusCode::OK, Json(points)).into_response())
    }

    async fn handle_sessions(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<WindowQuery>,
    ) -> Result<Response, AppError> {
        let window = params.to_window()?;
        let sessions = resources.analytics.sessions(&window).await?;
        Ok((StatusCode::OK, Json(sessions)).into_response())
    }

    async fn handle_progress(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let records = resources.analytics.progress().await?;
        Ok((StatusCode::OK, Json(records)).into_response())
    }

    async fn handle_stats(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let stats = resources.analytics.summary().await?;
        Ok((StatusCode::OK, Json(stats)).into_response())
    }

    async fn handle_log(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<WindowQuery>,
    ) -> Result<Response, AppError> {
        let window = params.to_window()?;
        let rows = resources.analytics.workout_log(&window).await?;
        Ok((StatusCode::OK, Json(rows)).into_response())
    }
}
