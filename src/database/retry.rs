// ABOUTME: Bounded startup connection retry with exponential backoff
// ABOUTME: Gives up with a service-unavailable error once attempts are exhausted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AnalyticsStore, SqliteStore};
use crate::config::DatabaseConfig;
use liftlog_core::errors::{AppError, AppResult};
use std::future::Future;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// Run `attempt_fn` until it succeeds or `config.connection_retries` attempts fail
///
/// The delay before retry `n` is `initial_retry_delay_ms * 2^(n-1)` capped at
/// `max_retry_delay_ms`. A zero retry count still makes one attempt.
///
/// # Errors
///
/// Returns `ExternalServiceUnavailable` carrying the last failure
pub async fn retry_with_backoff<F, Fut, T>(
    config: &DatabaseConfig,
    mut attempt_fn: F,
) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let max_attempts = config.connection_retries.max(1);
    let mut attempt = 1;
    loop {
        match attempt_fn().await {
            Ok(value) => {
                if attempt > 1 {
                    info!(attempt, "Database connection established after retry");
                }
                return Ok(value);
            }
            Err(e) if attempt >= max_attempts => {
                error!(
                    attempts = attempt,
                    error = %e,
                    "Database unreachable, giving up"
                );
                return Err(AppError::store_unavailable(format!(
                    "Database unreachable after {attempt} attempts: {}",
                    e.message
                ))
                .with_source(e));
            }
            Err(e) => {
                let delay = config.retry_delay(attempt);
                warn!(
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Database connection failed, retrying after backoff"
                );
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Connect and migrate the `SQLite` store under the configured retry policy
///
/// # Errors
///
/// Returns `ExternalServiceUnavailable` when every attempt fails
pub async fn connect_with_retry(config: &DatabaseConfig) -> AppResult<SqliteStore> {
    retry_with_backoff(config, || async move {
        let store = SqliteStore::connect(config).await?;
        store.migrate().await?;
        Ok(store)
    })
    .await
}
