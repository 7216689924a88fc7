// ABOUTME: Database configuration types for the SQLite analytics store
// ABOUTME: Parses the database URL and the bounded connection retry policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{env_var_or, parse_env_or};
use liftlog_core::constants::{database, defaults};
use liftlog_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::time::Duration;

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// On-disk `SQLite` file
    SQLite {
        /// Database file, created on first connect
        path: PathBuf,
    },
    /// Private in-memory database, lost when the pool closes
    Memory,
}

impl DatabaseUrl {
    /// Accepts `sqlite:<path>`, `sqlite::memory:`, or a bare file path
    ///
    /// # Errors
    ///
    /// Returns an error for empty URLs and for schemes this store cannot serve
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::config("DATABASE_URL is empty"));
        }
        let Some(path_str) = s.strip_prefix("sqlite:") else {
            if s.contains("://") {
                return Err(AppError::config(format!("Unsupported database URL scheme: {s}")));
            }
            // Bare path: treat as SQLite file
            return Ok(Self::SQLite {
                path: PathBuf::from(s),
            });
        };

        match path_str.trim_start_matches("//") {
            ":memory:" => Ok(Self::Memory),
            path => Ok(Self::SQLite {
                path: PathBuf::from(path),
            }),
        }
    }

    /// `sqlx` connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// True for `sqlite::memory:`
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(defaults::DATABASE_URL.trim_start_matches("sqlite:")),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Store connection configuration, passed to the store at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// Number of connection attempts on startup
    pub connection_retries: u32,
    /// Delay before the second attempt; doubles per attempt after that
    pub initial_retry_delay_ms: u64,
    /// Upper bound on any single delay
    pub max_retry_delay_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            max_connections: database::MAX_CONNECTIONS,
            connection_retries: database::CONNECTION_RETRIES,
            initial_retry_delay_ms: database::INITIAL_RETRY_DELAY_MS,
            max_retry_delay_ms: database::MAX_RETRY_DELAY_MS,
        }
    }
}

impl DatabaseConfig {
    /// Read `DATABASE_URL` and the `DB_*` retry settings
    ///
    /// # Errors
    ///
    /// Returns an error for an unusable URL or a non-numeric retry setting
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            url: DatabaseUrl::parse_url(&env_var_or("DATABASE_URL", defaults::DATABASE_URL))?,
            max_connections: parse_env_or("DB_MAX_CONNECTIONS", database::MAX_CONNECTIONS)?,
            connection_retries: parse_env_or(
                "DB_CONNECTION_RETRIES",
                database::CONNECTION_RETRIES,
            )?,
            initial_retry_delay_ms: parse_env_or(
                "DB_INITIAL_RETRY_DELAY_MS",
                database::INITIAL_RETRY_DELAY_MS,
            )?,
            max_retry_delay_ms: parse_env_or(
                "DB_MAX_RETRY_DELAY_MS",
                database::MAX_RETRY_DELAY_MS,
            )?,
        })
    }

    /// In-memory database without retries, for tests
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: DatabaseUrl::Memory,
            max_connections: 1,
            connection_retries: 1,
            initial_retry_delay_ms: 0,
            max_retry_delay_ms: 0,
        }
    }

    /// Delay before retry number `attempt` (1-based), capped at the maximum
    #[must_use]
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        let factor = 1_u64
            .checked_shl(attempt.saturating_sub(1))
            .unwrap_or(u64::MAX);
        let delay = self
            .initial_retry_delay_ms
            .saturating_mul(factor)
            .min(self.max_retry_delay_ms);
        Duration::from_millis(delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sqlite_urls() {
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./data/liftlog.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/liftlog.db")
            }
        );
        assert_eq!(
            DatabaseUrl::parse_url("sqlite::memory:").unwrap(),
            DatabaseUrl::Memory
        );
        assert_eq!(
            DatabaseUrl::parse_url("/tmp/x.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("/tmp/x.db")
            }
        );
    }

    #[test]
    fn test_parse_url_strips_authority_slashes() {
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:///var/lib/liftlog.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("/var/lib/liftlog.db")
            }
        );
        assert_eq!(
            DatabaseUrl::parse_url("sqlite://:memory:").unwrap(),
            DatabaseUrl::Memory
        );
    }

    #[test]
    fn test_rejects_foreign_scheme() {
        let err = DatabaseUrl::parse_url("postgres://localhost/fitness").unwrap_err();
        assert_eq!(err.code, liftlog_core::errors::ErrorCode::ConfigError);
        assert!(DatabaseUrl::parse_url("  ").is_err());
    }

    #[test]
    fn test_retry_delay_doubles_and_caps() {
        let config = DatabaseConfig {
            initial_retry_delay_ms: 3_000,
            max_retry_delay_ms: 30_000,
            ..DatabaseConfig::default()
        };
        assert_eq!(config.retry_delay(1), Duration::from_millis(3_000));
        assert_eq!(config.retry_delay(2), Duration::from_millis(6_000));
        assert_eq!(config.retry_delay(4), Duration::from_millis(24_000));
        assert_eq!(config.retry_delay(5), Duration::from_millis(30_000));
        assert_eq!(config.retry_delay(90), Duration::from_millis(30_000));
    }
}
