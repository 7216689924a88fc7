// ABOUTME: Liveness and readiness endpoints for process supervisors
// ABOUTME: /health always answers; /ready round-trips the analytics store first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use liftlog_core::errors::{AppError, AppResult};
use serde::Serialize;
use std::sync::Arc;

/// Health and readiness body
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// `healthy` or `ready`
    pub status: &'static str,
    /// Store backend name, readiness only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<&'static str>,
    /// Time the check was answered
    pub timestamp: DateTime<Utc>,
}

/// `/health` and `/ready`
pub struct HealthRoutes;

impl HealthRoutes {
    /// Health routes sharing the server state
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    // axum handlers must be async
    #[allow(clippy::unused_async)]
    async fn handle_health() -> Json<HealthStatus> {
        Json(HealthStatus {
            status: "healthy",
            backend: None,
            timestamp: Utc::now(),
        })
    }

    /// 503 while the store cannot answer a trivial query
    async fn handle_ready(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<HealthStatus>> {
        if let Err(e) = resources.analytics.ping().await {
            return Err(
                AppError::store_unavailable(format!("Store not ready: {}", e.message))
                    .with_source(e),
            );
        }

        Ok(Json(HealthStatus {
            status: "ready",
            backend: Some(resources.database.backend_info()),
            timestamp: Utc::now(),
        }))
    }
}
