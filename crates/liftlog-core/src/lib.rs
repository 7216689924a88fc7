// ABOUTME: Core types and constants for the Liftlog fitness analytics service
// ABOUTME: Foundation crate with error handling, fitness log models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Liftlog Core
//!
//! Foundation crate providing shared types and constants for the Liftlog
//! fitness log analytics service. This crate is designed to change
//! infrequently, so the analytics engine and the server can be compiled
//! independently against it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Analytics windows and display constants
//! - **models**: Weight samples, exercise sets, sessions, and identities

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`WeightSample`, `ExerciseSet`, `WorkoutSession`, etc.)
pub mod models;
