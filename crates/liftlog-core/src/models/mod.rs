// ABOUTME: Core data models for the Liftlog fitness analytics service
// ABOUTME: Re-exports weight samples, exercise sets, sessions, and date windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Raw observations (`WeightSample`, `ExerciseSet`) are what the store holds.
//! `WorkoutSession` is derived on every query and never persisted.
//! `ExerciseIdentity` is the grouping key for every time-ordered comparison.

mod weight;
mod window;
mod workout;

pub use weight::WeightSample;
pub use window::DateWindow;
pub use workout::{exercise_label, ExerciseIdentity, ExerciseSet, WorkoutSession};
