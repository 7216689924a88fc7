// ABOUTME: Workout models: raw per-set log rows, exercise identities, and derived sessions
// ABOUTME: Sessions aggregate every set for one (date, exercise, side) key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// One logged set, exactly as ingested
///
/// Optional fields come from empty CSV cells; nothing beyond that is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// Training day
    pub date: NaiveDate,
    /// Program category for the day ("Push", "Legs", ...)
    pub day_type: Option<String>,
    /// Exercise name
    pub exercise: String,
    /// Laterality tag ("left", "right"), absent for bilateral work
    pub side: Option<String>,
    /// Position of the set within the exercise
    pub set_number: Option<u32>,
    /// Load in pounds
    #[serde(rename = "weight_lbs")]
    pub weight: Option<f64>,
    /// Repetitions completed
    pub reps: Option<u32>,
}

impl ExerciseSet {
    /// Load moved in this set (weight x reps) when both are known
    #[must_use]
    pub fn volume(&self) -> Option<f64> {
        match (self.weight, self.reps) {
            (Some(weight), Some(reps)) => Some(weight * f64::from(reps)),
            _ => None,
        }
    }

    /// Identity this set contributes to
    #[must_use]
    pub fn identity(&self) -> ExerciseIdentity {
        ExerciseIdentity::new(self.exercise.clone(), self.side.clone())
    }
}

/// Grouping key for progress comparison: exercise name plus optional side
///
/// Ordering is lexicographic by exercise, then side with `None` first.
/// A missing side is its own identity, distinct from every present side.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExerciseIdentity {
    /// Exercise name
    pub exercise: String,
    /// Laterality tag
    pub side: Option<String>,
}

impl ExerciseIdentity {
    /// Create an identity
    pub fn new(exercise: impl Into<String>, side: Option<String>) -> Self {
        Self {
            exercise: exercise.into(),
            side,
        }
    }

    /// Display label used by the dashboard, e.g. `Lunge (left)`
    #[must_use]
    pub fn label(&self) -> String {
        exercise_label(&self.exercise, self.side.as_deref())
    }
}

impl Display for ExerciseIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.label())
    }
}

/// Render the dashboard label for an exercise and optional side
#[must_use]
pub fn exercise_label(exercise: &str, side: Option<&str>) -> String {
    side.map_or_else(
        || exercise.to_owned(),
        |side| format!("{exercise} ({side})"),
    )
}

/// One day's aggregated work for one exercise identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Training day
    pub date: NaiveDate,
    /// Program category carried from the contributing sets
    pub day_type: Option<String>,
    /// Exercise name
    pub exercise: String,
    /// Laterality tag
    pub side: Option<String>,
    /// Heaviest load across the sets, if any set recorded a load
    pub max_weight: Option<f64>,
    /// Sum of reps across sets that recorded reps
    pub total_reps: Option<u32>,
    /// Number of sets logged
    pub sets_completed: u32,
    /// Sum of weight x reps across sets with both values
    pub total_volume: Option<f64>,
}

impl WorkoutSession {
    /// Identity this session belongs to
    #[must_use]
    pub fn identity(&self) -> ExerciseIdentity {
        ExerciseIdentity::new(self.exercise.clone(), self.side.clone())
    }

    /// Whether both sessions share an exercise identity
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        self.exercise == other.exercise && self.side == other.side
    }

    /// Dashboard label for this session's identity
    #[must_use]
    pub fn exercise_label(&self) -> String {
        exercise_label(&self.exercise, self.side.as_deref())
    }
}
