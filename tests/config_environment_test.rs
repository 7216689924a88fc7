// ABOUTME: Tests for environment-driven server and loader configuration
// ABOUTME: Serialized because every case mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use liftlog_server::config::{DatabaseUrl, LoaderConfig, ServerConfig};
use liftlog_server::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const VARS: &[&str] = &[
    "HOST",
    "HTTP_PORT",
    "CORS_ALLOWED_ORIGINS",
    "DASHBOARD_DIR",
    "DATA_DIR",
    "DATABASE_URL",
    "DB_MAX_CONNECTIONS",
    "DB_CONNECTION_RETRIES",
    "DB_INITIAL_RETRY_DELAY_MS",
    "DB_MAX_RETRY_DELAY_MS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.bind_address(), "127.0.0.1:5000");
    assert_eq!(config.cors.allowed_origins, "*");
    assert!(config.dashboard_dir.is_none());
    assert_eq!(
        config.database.url,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/liftlog.db")
        }
    );
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var("HOST", "0.0.0.0");
    env::set_var("HTTP_PORT", "8088");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("DASHBOARD_DIR", "./dashboard");
    env::set_var("DB_CONNECTION_RETRIES", "7");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.bind_address(), "0.0.0.0:8088");
    assert!(config.database.url.is_memory());
    assert_eq!(config.dashboard_dir, Some(PathBuf::from("./dashboard")));
    assert_eq!(config.database.connection_retries, 7);
    assert!(config.summary().contains("./dashboard"));
}

#[test]
#[serial]
fn test_invalid_port_is_rejected() {
    clear_env();
    env::set_var("HTTP_PORT", "eighty");

    let err = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("HTTP_PORT"));
}

#[test]
#[serial]
fn test_foreign_database_scheme_is_config_error() {
    clear_env();
    env::set_var("DATABASE_URL", "postgresql://localhost/liftlog");

    let err = LoaderConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_blank_dashboard_dir_disables_dashboard() {
    clear_env();
    env::set_var("DASHBOARD_DIR", "  ");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(config.dashboard_dir.is_none());
}

#[test]
#[serial]
fn test_loader_data_dir() {
    clear_env();
    env::set_var("DATA_DIR", "/srv/exports");

    let config = LoaderConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.data_dir, PathBuf::from("/srv/exports"));
}

#[test]
#[serial]
fn test_loader_rejects_memory_database() {
    clear_env();
    env::set_var("DATABASE_URL", "sqlite::memory:");

    let config = LoaderConfig::from_env().unwrap();
    clear_env();

    let err = config.validate().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);
    assert!(err.message.contains("sqlite::memory:"));
}

#[test]
#[serial]
fn test_loader_accepts_file_database() {
    clear_env();
    env::set_var("DATABASE_URL", "sqlite:/srv/liftlog/liftlog.db");

    let config = LoaderConfig::from_env().unwrap();
    clear_env();

    config.validate().unwrap();
}
