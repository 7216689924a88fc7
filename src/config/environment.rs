// ABOUTME: Environment-based configuration for the HTTP server and the CSV loader
// ABOUTME: Network binding, CORS origins, dashboard directory, and data directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::database::DatabaseConfig;
use super::{env_var_or, parse_env_or};
use liftlog_core::constants::defaults;
use liftlog_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` for any origin
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// CORS settings
    pub cors: CorsConfig,
    /// Static dashboard directory served as the router fallback
    pub dashboard_dir: Option<PathBuf>,
    /// Store connection settings
    pub database: DatabaseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            cors: CorsConfig::default(),
            dashboard_dir: None,
            database: DatabaseConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to an unparseable value
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        Ok(Self {
            host: env_var_or("HOST", defaults::HOST),
            http_port: parse_env_or("HTTP_PORT", defaults::HTTP_PORT)?,
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            dashboard_dir: env::var("DASHBOARD_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            database: DatabaseConfig::from_env()?,
        })
    }

    /// `host:port` string for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Liftlog Server Configuration:\n\
             - Bind: {}\n\
             - Database: {}\n\
             - DB Retries: {} (initial {}ms, max {}ms)\n\
             - CORS Origins: {}\n\
             - Dashboard: {}",
            self.bind_address(),
            self.database.url,
            self.database.connection_retries,
            self.database.initial_retry_delay_ms,
            self.database.max_retry_delay_ms,
            self.cors.allowed_origins,
            self.dashboard_dir
                .as_ref()
                .map_or_else(|| "disabled".to_owned(), |d| d.display().to_string()),
        )
    }
}

/// CSV loader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Directory holding `workout_log.csv` and `weight_log.csv`
    pub data_dir: PathBuf,
    /// Store connection settings
    pub database: DatabaseConfig,
}

impl LoaderConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to an unparseable value
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            data_dir: PathBuf::from(env_var_or("DATA_DIR", defaults::DATA_DIR)),
            database: DatabaseConfig::from_env()?,
        })
    }

    /// Reject targets the load cannot persist to
    ///
    /// # Errors
    ///
    /// Returns a config error for `sqlite::memory:`, whose contents vanish
    /// when the loader exits
    pub fn validate(&self) -> AppResult<()> {
        if self.database.url.is_memory() {
            return Err(AppError::config(
                "Refusing to load into sqlite::memory:, the data would be discarded on exit",
            ));
        }
        Ok(())
    }
}
