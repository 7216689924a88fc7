// ABOUTME: Application constants for analytics windows, defaults, and service identity
// ABOUTME: Shared between the analytics engine, the store, and the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants organized by domain

/// Weight trend analytics
pub mod weight {
    /// Number of samples in the trailing rolling-average window
    pub const ROLLING_WINDOW_SAMPLES: usize = 7;

    /// Decimal places kept when reporting net weight change
    pub const CHANGE_ROUNDING_FACTOR: f64 = 10.0;
}

/// Service identity used in logs and health responses
pub mod service_names {
    /// Name of the HTTP server binary
    pub const LIFTLOG_SERVER: &str = "liftlog-server";
    /// Name of the CSV loader binary
    pub const LIFTLOG_LOAD: &str = "liftlog-load";
}

/// Default configuration values
pub mod defaults {
    /// Port the dashboard expects the API on
    pub const HTTP_PORT: u16 = 5000;
    /// Bind host
    pub const HOST: &str = "127.0.0.1";
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/liftlog.db";
    /// Default directory holding the CSV exports
    pub const DATA_DIR: &str = "./data";
    /// Workout log file name inside the data directory
    pub const WORKOUT_LOG_FILE: &str = "workout_log.csv";
    /// Weight log file name inside the data directory
    pub const WEIGHT_LOG_FILE: &str = "weight_log.csv";
}

/// Store connection policy
pub mod database {
    /// Number of connection attempts before giving up
    pub const CONNECTION_RETRIES: u32 = 10;
    /// Delay before the second attempt, doubled after each failure
    pub const INITIAL_RETRY_DELAY_MS: u64 = 3_000;
    /// Upper bound for the backoff delay
    pub const MAX_RETRY_DELAY_MS: u64 = 30_000;
    /// Pool size
    pub const MAX_CONNECTIONS: u32 = 5;
}
