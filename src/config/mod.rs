// ABOUTME: Configuration management module for server and loader settings
// ABOUTME: All settings are read from environment variables with typed defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: HTTP server and loader settings
//! - **Database**: store URL, pool size, and connection retry policy

use liftlog_core::errors::{AppError, AppResult};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Database URL, pool, and retry configuration
pub mod database;
/// Server and loader configuration from environment variables
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{CorsConfig, LoaderConfig, ServerConfig};

/// Read an environment variable, falling back to `default` when unset
pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
///
/// Set-but-unparseable values are rejected rather than silently defaulted.
pub(crate) fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    env::var(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|e| AppError::invalid_input(format!("Invalid {key} value: {e}")))
    })
}
