// ABOUTME: Route module organization for the Liftlog HTTP endpoints
// ABOUTME: Groups route definitions by domain with thin handlers over the services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Dashboard analytics routes
pub mod analytics;
/// Health check and readiness routes
pub mod health;

pub use analytics::{AnalyticsRoutes, WindowQuery};
pub use health::HealthRoutes;
