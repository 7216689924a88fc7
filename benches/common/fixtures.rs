// ABOUTME: Deterministic workout and weight log generators for benchmarks
// ABOUTME: Produces a rotating push/pull/legs program with slowly drifting loads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for realistic training logs.

use chrono::{Duration, NaiveDate};
use liftlog_server::models::{ExerciseSet, WeightSample};

/// Program rotation: (`day_type`, exercises, unilateral)
const PROGRAM: &[(&str, &[&str], bool)] = &[
    ("Push", &["Bench Press", "Overhead Press", "Dips"], false),
    ("Pull", &["Barbell Row", "Pull Up", "Face Pull"], false),
    ("Legs", &["Squat", "Romanian Deadlift"], false),
    ("Legs", &["Bulgarian Split Squat", "Lunge"], true),
];

/// Sets logged per exercise per session
const SETS_PER_EXERCISE: u32 = 3;

/// Predefined log sizes in training days
#[derive(Debug, Clone, Copy)]
pub enum LogSize {
    /// A month of training
    Month,
    /// A year of training
    Year,
    /// Several years of history
    Archive,
}

impl LogSize {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Month => 30,
            Self::Year => 365,
            Self::Archive => 1500,
        }
    }
}

/// First day of every generated log
#[must_use]
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 3).unwrap_or_default()
}

/// Generate one training day per calendar day following the program rotation
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_sets(size: LogSize) -> Vec<ExerciseSet> {
    let mut sets = Vec::new();
    for day in 0..size.days() {
        let (day_type, exercises, unilateral) = PROGRAM[day % PROGRAM.len()];
        let date = start_date() + Duration::days(day as i64);
        let sides: &[Option<&str>] = if unilateral {
            &[Some("left"), Some("right")]
        } else {
            &[None]
        };

        for (e, exercise) in exercises.iter().enumerate() {
            for side in sides {
                for set_number in 1..=SETS_PER_EXERCISE {
                    let drift = ((day * 7 + e * 13) % 20) as f64;
                    sets.push(ExerciseSet {
                        date,
                        day_type: Some(day_type.to_owned()),
                        exercise: (*exercise).to_owned(),
                        side: side.map(str::to_owned),
                        set_number: Some(set_number),
                        weight: Some(95.0 + drift * 2.5),
                        reps: Some(6 + ((day + set_number as usize) % 6) as u32),
                    });
                }
            }
        }
    }
    sets
}

/// Generate one morning weigh-in per day
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_weights(size: LogSize) -> Vec<WeightSample> {
    (0..size.days())
        .map(|day| {
            let noise = ((day * 37) % 11) as f64 / 5.0 - 1.0;
            WeightSample::new(
                start_date() + Duration::days(day as i64),
                185.0 - day as f64 * 0.02 + noise,
            )
        })
        .collect()
}
