// ABOUTME: Main library entry point for the Liftlog fitness log analytics service
// ABOUTME: HTTP API, CSV loader, and storage over the liftlog analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Liftlog Server
//!
//! Turns a personal training log (per-set workout rows and daily body-weight
//! readings) into dashboard analytics: weight trend, per-session totals,
//! progress detection, and staleness ranking.
//!
//! ## Architecture
//!
//! - **`liftlog-core`**: error types, models, constants
//! - **`liftlog-intelligence`**: the pure analytics functions
//! - **Database**: `AnalyticsStore` trait with `SQLite` and in-memory backends
//! - **Ingest**: CSV loader that replaces the log tables
//! - **Services / Routes**: the JSON API consumed by the dashboard
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use liftlog_server::config::ServerConfig;
//! use liftlog_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Liftlog configured on {}", config.bind_address());
//!     Ok(())
//! }
//! ```

/// Reference-date source for staleness
pub mod clock;

/// Configuration management
pub mod config;

/// Storage backends
pub mod database;

/// CSV ingestion
pub mod ingest;

/// Logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared route state
pub mod resources;

/// HTTP routes
pub mod routes;

/// Router assembly and serve loop
pub mod server;

/// Domain services
pub mod services;

// Re-export the foundation crates under their familiar module names
pub use liftlog_core::{constants, errors, models};
pub use liftlog_intelligence as intelligence;
