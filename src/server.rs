// ABOUTME: HTTP server assembly: router, middleware stack, and serve loop
// ABOUTME: Serves the analytics API plus an optional static dashboard directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::middleware::{
    make_request_span, record_response, setup_cors, MakeRequestIdentifier, REQUEST_ID_HEADER,
};
use crate::resources::ServerResources;
use crate::routes::{AnalyticsRoutes, HealthRoutes};
use axum::http::HeaderName;
use axum::Router;
use liftlog_core::errors::{AppError, AppResult};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the full application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let config = Arc::clone(&resources.config);

    let mut router = Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(AnalyticsRoutes::routes(resources));

    if let Some(dir) = &config.dashboard_dir {
        if dir.is_dir() {
            info!(dir = %dir.display(), "Serving dashboard files");
            let files = ServeDir::new(dir).append_index_html_on_directories(true);
            router = router.fallback_service(files);
        } else {
            warn!(
                dir = %dir.display(),
                "DASHBOARD_DIR is not a directory, dashboard disabled"
            );
        }
    }

    let trace = TraceLayer::new_for_http()
        .make_span_with(make_request_span)
        .on_response(record_response);

    router
        .layer(setup_cors(&config.cors))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(trace)
        .layer(SetRequestIdLayer::new(request_id, MakeRequestIdentifier))
}

/// Bind the configured address and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run_server(resources: Arc<ServerResources>) -> AppResult<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| {
            AppError::config(format!("Failed to bind {address}: {e}"))
                .with_source(e)
        })?;

    info!(address = %address, "HTTP server listening");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("HTTP server error: {e}")))?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
