// ABOUTME: Shared server state handed to every route handler
// ABOUTME: Bundles the store, the analytics service, and the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::clock::{Clock, SystemClock};
use crate::config::ServerConfig;
use crate::database::Database;
use crate::services::AnalyticsService;
use std::sync::Arc;

/// Server-wide resources, created once at startup
#[derive(Clone)]
pub struct ServerResources {
    /// Active store backend
    pub database: Arc<Database>,
    /// Query service over `database`
    pub analytics: AnalyticsService,
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Resources using the system clock
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self::with_clock(database, config, Arc::new(SystemClock))
    }

    /// Resources with an explicit reference-date source
    #[must_use]
    pub fn with_clock(database: Database, config: ServerConfig, clock: Arc<dyn Clock>) -> Self {
        let database = Arc::new(database);
        Self {
            analytics: AnalyticsService::new(database.clone(), clock),
            database,
            config: Arc::new(config),
        }
    }
}
